//! Hero section: emblem, title and call-to-action buttons.
//!
//! Each element animates in on its own welcome delay once the app is
//! ready.

use dioxus::prelude::*;
use revanarc_core::WelcomeStep;
use revanarc_ui::{Button, ButtonVariant, RevanEmblem, RippleSpan, EMBLEM_RIPPLE_KEY};

use crate::context::{use_clock, use_site};

fn step_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{} animate-in", base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn Hero() -> Element {
    let mut site = use_site();
    let clock = use_clock();

    let s = site.read();
    let boot = s.bootstrap();
    let emblem = s.emblem().clone();
    let emblem_class = step_class(emblem.class(), boot.is_revealed(WelcomeStep::Emblem));
    let title_class = step_class("hero-title", boot.is_revealed(WelcomeStep::Title));
    let description_class = step_class("hero-description", boot.is_revealed(WelcomeStep::Description));
    let actions_class = step_class("hero-actions", boot.is_revealed(WelcomeStep::Actions));
    let emblem_tracked = if s.is_in_viewport(EMBLEM_RIPPLE_KEY) {
        format!("{} in-viewport", emblem_class)
    } else {
        emblem_class
    };
    let emblem_ripples: Vec<_> = s.ripples().for_element(EMBLEM_RIPPLE_KEY).cloned().collect();
    let explore_ripples: Vec<_> = s.ripples().for_element("cta-explore").cloned().collect();
    let learn_ripples: Vec<_> = s.ripples().for_element("cta-learn").cloned().collect();
    drop(s);

    rsx! {
        section { id: "home", class: "hero welcome-sequence",
            div { "data-track": EMBLEM_RIPPLE_KEY,
                RevanEmblem {
                    class: emblem_tracked,
                    left_glow: emblem.left_glow(),
                    right_glow: emblem.right_glow(),
                    onmouseenter: move |_| site.write().emblem_enter(),
                    onmouseleave: move |_| site.write().emblem_leave(clock.now()),
                    for ripple in emblem_ripples {
                        RippleSpan { key: "{ripple.id}", ripple }
                    }
                }
            }
            h1 { class: "{title_class}", "REVANARC" }
            p { class: "{description_class}",
                "Balancing offence and defence in AI security. Research, tooling and "
                "reference architectures for teams that need to break models before "
                "adversaries do, and harden them after."
            }
            div { class: "{actions_class}",
                Button {
                    variant: ButtonVariant::Primary,
                    ripple_key: "cta-explore".to_string(),
                    onclick: move |_| {
                        site.write().navigate_to("#projects");
                    },
                    "Explore Projects"
                    for ripple in explore_ripples {
                        RippleSpan { key: "{ripple.id}", ripple }
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    ripple_key: "cta-learn".to_string(),
                    onclick: move |_| {
                        site.write().navigate_to("#knowledge");
                    },
                    "Start Learning"
                    for ripple in learn_ripples {
                        RippleSpan { key: "{ripple.id}", ripple }
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
    fn revealed_steps_gain_animate_in() {
        assert_eq!(step_class("hero-title", false), "hero-title");
        assert_eq!(step_class("hero-title", true), "hero-title animate-in");
    }
}
