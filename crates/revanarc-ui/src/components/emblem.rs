//! Revan Emblem Component
//!
//! The split-circle logo: a blue left half and a red right half inside a
//! brass ring. Glow and the `emblem-powered` pulse come from props so the
//! hover timing stays in the coordinator.

use dioxus::prelude::*;

/// Ripple key of the emblem element.
pub const EMBLEM_RIPPLE_KEY: &str = "emblem";

/// Properties for the RevanEmblem component
#[derive(Clone, PartialEq, Props)]
pub struct RevanEmblemProps {
    /// Class list, e.g. `revan-emblem emblem-powered animate-in`
    pub class: String,
    /// `box-shadow` for the blue half while hovered
    #[props(default)]
    pub left_glow: Option<&'static str>,
    /// `box-shadow` for the red half while hovered
    #[props(default)]
    pub right_glow: Option<&'static str>,
    /// Size of the SVG in pixels (default: 200)
    #[props(default = 200)]
    pub size: u32,
    pub onmouseenter: EventHandler<()>,
    pub onmouseleave: EventHandler<()>,
    /// Overlays such as hover ripples
    pub children: Element,
}

/// # Example
///
/// ```rust,ignore
/// let emblem = site.read().emblem().clone();
/// rsx! {
///     RevanEmblem {
///         class: emblem.class().to_string(),
///         left_glow: emblem.left_glow(),
///         right_glow: emblem.right_glow(),
///         onmouseenter: move |_| site.write().emblem_enter(),
///         onmouseleave: move |_| site.write().emblem_leave(now()),
///         for r in ripples { RippleSpan { ripple: r } }
///     }
/// }
/// ```
#[component]
pub fn RevanEmblem(props: RevanEmblemProps) -> Element {
    let size = props.size;
    let left_style = glow_style(props.left_glow);
    let right_style = glow_style(props.right_glow);

    rsx! {
        div {
            class: "{props.class}",
            role: "img",
            "aria-label": "RevanArc logo representing the duality of AI security",
            "data-ripple": EMBLEM_RIPPLE_KEY,
            onmouseenter: move |_| props.onmouseenter.call(()),
            onmouseleave: move |_| props.onmouseleave.call(()),
            div { class: "emblem-left", style: "{left_style}" }
            div { class: "emblem-right", style: "{right_style}" }
            svg {
                view_box: "0 0 200 200",
                width: "{size}",
                height: "{size}",
                "aria-hidden": "true",
                // Left half (blue)
                path {
                    d: "M100 20 A80 80 0 0 0 100 180 Z",
                    fill: "url(#emblem-blue)",
                }
                // Right half (red)
                path {
                    d: "M100 20 A80 80 0 0 1 100 180 Z",
                    fill: "url(#emblem-red)",
                }
                circle {
                    cx: "100",
                    cy: "100",
                    r: "84",
                    fill: "none",
                    stroke: "#c9a227",
                    stroke_width: "3",
                }
                line {
                    x1: "100",
                    y1: "16",
                    x2: "100",
                    y2: "184",
                    stroke: "#c9a227",
                    stroke_width: "2",
                }
                defs {
                    linearGradient { id: "emblem-blue", x1: "0", y1: "0", x2: "1", y2: "1",
                        stop { offset: "0%", stop_color: "#7fc1ff" }
                        stop { offset: "100%", stop_color: "#1f5fa8" }
                    }
                    linearGradient { id: "emblem-red", x1: "1", y1: "0", x2: "0", y2: "1",
                        stop { offset: "0%", stop_color: "#ff7a7a" }
                        stop { offset: "100%", stop_color: "#8f1d1d" }
                    }
                }
            }
            {props.children}
        }
    }
}

fn glow_style(glow: Option<&str>) -> String {
    match glow {
        Some(shadow) => format!("box-shadow: {};", shadow),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_style_is_empty_without_glow() {
        assert_eq!(glow_style(None), "");
        assert_eq!(
            glow_style(Some("0 0 40px red")),
            "box-shadow: 0 0 40px red;"
        );
    }
}
