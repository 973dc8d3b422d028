use dioxus::prelude::*;

use crate::context::use_site;

/// Transient notifications, newest last.
#[component]
pub fn NoticeStack() -> Element {
    let site = use_site();
    let notices = site.read().bootstrap().notices().to_vec();

    if notices.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "notification-stack", role: "status", "aria-live": "polite",
            for notice in notices {
                div { key: "{notice.id}", class: "{notice.kind.class()}",
                    "{notice.message}"
                }
            }
        }
    }
}
