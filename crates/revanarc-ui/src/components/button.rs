//! Button Components
//!
//! - Primary / Secondary: hero call-to-action buttons
//! - Card: repository button on a project card
//! - Ghost: low-emphasis actions (dismiss, reload)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Hero call-to-action, brass border with glow
    #[default]
    Primary,
    /// Hero call-to-action, outlined
    Secondary,
    /// Project card repository button
    Card,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "cta-button primary",
            ButtonVariant::Secondary => "cta-button secondary",
            ButtonVariant::Card => "card-button",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }

    /// Whether hovering this variant spawns a ripple
    pub fn ripples(&self) -> bool {
        !matches!(self, ButtonVariant::Ghost)
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content, including any ripple overlays
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes (state such as `loading`)
    #[props(default)]
    pub class: Option<String>,
    /// Element key reported to the bridge when the pointer enters
    #[props(default)]
    pub ripple_key: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| site.write().navigate_to("#projects"),
///         "Explore Projects"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());
    let ripple_key = props.ripple_key.clone().filter(|_| props.variant.ripples());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            "data-ripple": ripple_key,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// Hamburger toggle for the mobile navigation menu
#[derive(Clone, PartialEq, Props)]
pub struct MenuToggleProps {
    pub open: bool,
    pub onclick: EventHandler<()>,
}

#[component]
pub fn MenuToggle(props: MenuToggleProps) -> Element {
    rsx! {
        button {
            class: if props.open { "nav-toggle active" } else { "nav-toggle" },
            "aria-label": "Toggle navigation",
            "aria-expanded": if props.open { "true" } else { "false" },
            onclick: move |_| props.onclick.call(()),
            span { class: "hamburger-line" }
            span { class: "hamburger-line" }
            span { class: "hamburger-line" }
        }
    }
}

/// Append optional extra classes to a base class list.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
