//! Loading screen and the pre-load reload prompt.

use dioxus::prelude::*;
use revanarc_core::{LoadPhase, RELOAD_PROMPT};
use revanarc_ui::{Button, ButtonVariant};

use crate::context::use_site;

#[component]
pub fn LoadingScreen() -> Element {
    let site = use_site();
    let class = match site.read().bootstrap().phase() {
        LoadPhase::Loading => "loading-screen",
        LoadPhase::Fading => "loading-screen fade-out",
        LoadPhase::Ready => "loading-screen hidden",
    };

    rsx! {
        div { class: "{class}", "aria-hidden": "true",
            div { class: "loading-ring" }
            p { class: "loading-text", "INITIALIZING" }
        }
    }
}

/// Shown once if an error is trapped before loading completes.
#[component]
pub fn ReloadPrompt() -> Element {
    let site = use_site();
    if !site.read().bootstrap().reload_prompt() {
        return rsx! {};
    }

    rsx! {
        div { class: "error-message", role: "alert",
            p { "{RELOAD_PROMPT}" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    let _ = document::eval("location.reload();");
                },
                "Reload"
            }
        }
    }
}
