//! Project Status Badge
//!
//! Small pill in the corner of a project card showing development status.

use dioxus::prelude::*;
use revanarc_core::ProjectStatus;

#[derive(Clone, PartialEq, Props)]
pub struct StatusBadgeProps {
    pub status: ProjectStatus,
}

#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let class = format!("card-status {}", props.status.class());
    let label = props.status.label();

    rsx! {
        span {
            class: "{class}",
            role: "status",
            span { class: "status-dot" }
            "{label}"
        }
    }
}
