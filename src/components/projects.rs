//! Projects section: category filters, count and the card grid.

use dioxus::prelude::*;
use revanarc_core::{CardRef, Project};
use revanarc_ui::{
    filter_options, filter_ripple_key, Button, ButtonVariant, FilterPills, RippleSpan,
    StatusBadge,
};

use crate::context::{use_clock, use_site};

/// Idle label of the repository button.
const VIEW_LABEL: &str = "View Repository";

pub fn card_ripple_key(project: &Project) -> String {
    format!("card-{}", project.id)
}

#[component]
pub fn Projects() -> Element {
    let mut site = use_site();

    let s = site.read();
    let projects = s.projects();
    let options = filter_options(&projects.catalog().categories());
    let selected = projects.filter().to_string();
    let filter_ripples: Vec<_> = options
        .iter()
        .flat_map(|option| {
            let key = filter_ripple_key(&option.tag);
            s.ripples()
                .for_element(&key)
                .cloned()
                .collect::<Vec<_>>()
        })
        .collect();
    let count = projects.visible_count_label();
    let cards: Vec<Project> = projects.catalog().iter().cloned().collect();
    drop(s);

    rsx! {
        section { id: "projects", class: "section projects-section",
            h2 { class: "section-title", "Projects" }
            FilterPills {
                options,
                selected,
                ripples: filter_ripples,
                on_select: move |tag: String| {
                    let visible = site.write().select_filter(&tag).len();
                    tracing::debug!(%tag, visible, "Filter selected");
                },
            }
            p { class: "project-count", "{count}" }
            div { class: "projects-grid",
                for project in cards {
                    ProjectCard { key: "{project.id}", project }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let mut site = use_site();
    let clock = use_clock();

    let ripple_key = card_ripple_key(&project);
    let s = site.read();
    let presentation = s.projects().presentation(&project.id);
    let state = s.projects().button_state(&project.id);
    let ripples: Vec<_> = s.ripples().for_element(&ripple_key).cloned().collect();
    let tracked = s.is_in_viewport(&ripple_key);
    drop(s);

    let label = state.label(VIEW_LABEL).to_string();
    let style = presentation.style();
    let interactive = presentation.interactive;
    let card_class = if tracked { "project-card in-viewport" } else { "project-card" };
    let card_for_body = CardRef::with_id(project.id.as_str());
    let card_for_key = card_for_body.clone();
    let card_for_button = card_for_body.clone();

    rsx! {
        article {
            class: "{card_class}",
            style: "{style}",
            "data-category": "{project.category_attr()}",
            "data-project-id": "{project.id}",
            "data-track": "{ripple_key}",
            tabindex: if interactive { "0" } else { "-1" },
            "aria-disabled": if interactive { "false" } else { "true" },
            onclick: move |_| {
                site.write().click_card(&card_for_body, clock.now());
            },
            onkeydown: move |evt: KeyboardEvent| {
                if interactive && is_activation_key(&evt.key()) {
                    evt.prevent_default();
                    site.write().click_card(&card_for_key, clock.now());
                }
            },
            div { class: "card-header",
                span { class: "card-icon", "{project.icon}" }
                StatusBadge { status: project.status }
            }
            h3 { class: "card-title", "{project.title}" }
            p { class: "card-description", "{project.description}" }
            div { class: "card-tags",
                for tag in project.tags.iter() {
                    span { key: "{tag}", class: "card-tag", "{tag}" }
                }
            }
            // Keys on the button activate the button itself, not the card
            div {
                class: "card-actions",
                onkeydown: move |evt: KeyboardEvent| evt.stop_propagation(),
                Button {
                    variant: ButtonVariant::Card,
                    disabled: state.disabled() || !interactive,
                    class: state.class().map(str::to_string),
                    ripple_key: ripple_key.clone(),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        site.write().open_repository(&card_for_button, clock.now());
                    },
                    "{label}"
                    for ripple in ripples {
                        RippleSpan { key: "{ripple.id}", ripple }
                    }
                }
            }
        }
    }
}

/// Enter and Space activate a focused card.
fn is_activation_key(key: &Key) -> bool {
    matches!(key, Key::Enter) || *key == Key::Character(" ".into())
}
