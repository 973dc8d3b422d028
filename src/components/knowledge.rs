//! Knowledge section: the stage constellation and its detail panels.

use dioxus::prelude::*;
use revanarc_core::builtin_stages;
use revanarc_ui::{ConstellationMap, ConstellationNode};

use crate::context::{use_clock, use_site};

/// Reveal and viewport-tracking key of the constellation wrapper.
const MAP_KEY: &str = "knowledge-map";

#[component]
pub fn Knowledge() -> Element {
    let mut site = use_site();
    let clock = use_clock();
    let stages = use_hook(builtin_stages);

    let s = site.read();
    let constellation = s.constellation();
    let active = constellation
        .active_stage()
        .and_then(|id| constellation.index_of(id));
    let highlighted = constellation.highlighted_edges().to_vec();
    let details_class = if constellation.details_visible() {
        "stage-details visible"
    } else {
        "stage-details"
    };
    let panels: Vec<_> = stages
        .iter()
        .map(|stage| (stage.clone(), constellation.panel_style(&stage.id)))
        .collect();
    let mut map_class = String::from("fade-in-on-scroll");
    if s.is_revealed(MAP_KEY) {
        map_class.push_str(" visible");
    }
    // Node pulses pause while the map is off screen
    if s.is_in_viewport(MAP_KEY) {
        map_class.push_str(" in-viewport");
    }
    drop(s);

    let nodes: Vec<ConstellationNode> = stages
        .iter()
        .map(|stage| ConstellationNode {
            stage: stage.id.to_string(),
            title: stage.title.to_string(),
        })
        .collect();
    let stage_ids: Vec<_> = stages.iter().map(|stage| stage.id.clone()).collect();

    rsx! {
        section { id: "knowledge", class: "section knowledge-section",
            h2 { class: "section-title", "Knowledge Path" }
            p { class: "section-subtitle",
                "Four stages from first contact with AI risk to designing for it."
            }
            div { class: "knowledge-layout",
                div { "data-reveal": MAP_KEY, "data-track": MAP_KEY,
                    ConstellationMap {
                        nodes,
                        active,
                        highlighted,
                        class: map_class,
                        on_select: move |index: usize| {
                            if let Some(stage) = stage_ids.get(index) {
                                site.write().select_stage(stage, clock.now());
                            }
                        },
                        on_hover: move |index: Option<usize>| match index {
                            Some(index) => site.write().hover_node(index),
                            None => site.write().leave_node(),
                        },
                    }
                }
                div { class: "{details_class}",
                    for (stage, style) in panels {
                        div {
                            key: "{stage.id}",
                            class: "stage-content",
                            "data-stage": "{stage.id}",
                            style: "{style}",
                            h3 { "{stage.title}" }
                            p { "{stage.summary}" }
                            ul {
                                for point in stage.points.iter() {
                                    li { key: "{point}", "{point}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
