//! Knowledge Constellation Component
//!
//! Four stage nodes on a circle joined by six connection lines. Which
//! lines light up on hover, and which node is active, is decided by the
//! core `Constellation`; this component only draws it.

use dioxus::prelude::*;

/// Endpoints (node indices) of each connection line, by edge index.
pub const EDGE_ENDPOINTS: [(usize, usize); 6] = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)];

const CENTER: f64 = 150.0;
const RADIUS: f64 = 110.0;

/// A node as rendered: its stage id and label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstellationNode {
    pub stage: String,
    pub title: String,
}

/// SVG position of node `index` out of `count`, starting at the top and
/// going clockwise.
pub fn node_position(index: usize, count: usize) -> (f64, f64) {
    if count == 0 {
        return (CENTER, CENTER);
    }
    let angle = -std::f64::consts::FRAC_PI_2
        + std::f64::consts::TAU * index as f64 / count as f64;
    (CENTER + RADIUS * angle.cos(), CENTER + RADIUS * angle.sin())
}

#[derive(Clone, PartialEq, Props)]
pub struct ConstellationMapProps {
    pub nodes: Vec<ConstellationNode>,
    /// Index of the selected node
    pub active: Option<usize>,
    /// Edge indices currently highlighted by hover
    pub highlighted: Vec<usize>,
    /// Extra classes on the container (`in-viewport`)
    #[props(default)]
    pub class: Option<String>,
    pub on_select: EventHandler<usize>,
    /// `Some(i)` on node enter, `None` on leave
    pub on_hover: EventHandler<Option<usize>>,
}

#[component]
pub fn ConstellationMap(props: ConstellationMapProps) -> Element {
    let count = props.nodes.len();
    let class = super::join_classes("constellation", props.class.as_deref());

    rsx! {
        div { class: "{class}",
            svg {
                class: "constellation-lines",
                view_box: "0 0 300 300",
                "aria-hidden": "true",
                for (edge, (a, b)) in EDGE_ENDPOINTS.iter().copied().enumerate() {
                    if a < count && b < count {
                        {
                            let (x1, y1) = node_position(a, count);
                            let (x2, y2) = node_position(b, count);
                            let lit = props.highlighted.contains(&edge);
                            rsx! {
                                line {
                                    key: "{edge}",
                                    class: if lit { "connection-line highlighted" } else { "connection-line" },
                                    x1: "{x1}",
                                    y1: "{y1}",
                                    x2: "{x2}",
                                    y2: "{y2}",
                                }
                            }
                        }
                    }
                }
            }
            for (index, node) in props.nodes.iter().enumerate() {
                {
                    let (x, y) = node_position(index, count);
                    let active = props.active == Some(index);
                    let on_select = props.on_select;
                    let on_hover = props.on_hover;
                    rsx! {
                        div {
                            key: "{node.stage}",
                            class: if active { "knowledge-node active" } else { "knowledge-node" },
                            "data-stage": "{node.stage}",
                            role: "button",
                            tabindex: "0",
                            "aria-pressed": if active { "true" } else { "false" },
                            style: "left: {x / 3.0}%; top: {y / 3.0}%;",
                            onclick: move |_| on_select.call(index),
                            onkeydown: move |evt: KeyboardEvent| {
                                if matches!(evt.key(), Key::Enter) || evt.key() == Key::Character(" ".into()) {
                                    on_select.call(index);
                                }
                            },
                            onmouseenter: move |_| on_hover.call(Some(index)),
                            onmouseleave: move |_| on_hover.call(None),
                            span { class: "node-core" }
                            span { class: "node-label", "{node.title}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_cover_every_pair_of_four_nodes() {
        let mut pairs: Vec<(usize, usize)> = EDGE_ENDPOINTS
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 6);
    }

    #[test]
    fn first_node_sits_at_the_top() {
        let (x, y) = node_position(0, 4);
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - 40.0).abs() < 1e-9);
    }
}
