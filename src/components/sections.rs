//! Static content sections. Each one fades in when it first enters the
//! viewport.

use dioxus::prelude::*;

use crate::context::use_site;

fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{} fade-in-on-scroll visible", base)
    } else {
        format!("{} fade-in-on-scroll", base)
    }
}

#[component]
pub fn About() -> Element {
    let site = use_site();
    let class = reveal_class("about-content", site.read().is_revealed("about"));

    rsx! {
        section { id: "about", class: "section about-section",
            h2 { class: "section-title", "About" }
            div { class: "{class}", "data-reveal": "about",
                p {
                    "RevanArc works on both sides of the line: attacking AI systems to "
                    "find where they break, and building the controls that keep them "
                    "standing."
                }
                div { class: "duality-grid",
                    div { class: "duality-card blue",
                        h3 { "Blue Team" }
                        p { "Guardrails, monitoring and evaluation for deployed models." }
                    }
                    div { class: "duality-card red",
                        h3 { "Red Team" }
                        p { "Adversarial testing, jailbreak research and threat emulation." }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let class = reveal_class("contact-content", site.read().is_revealed("contact"));

    rsx! {
        section { id: "contact", class: "section contact-section",
            h2 { class: "section-title", "Contact" }
            div { class: "{class}", "data-reveal": "contact",
                p { "Collaboration, research or an engagement in mind? Get in touch." }
                a {
                    class: "cta-button secondary",
                    href: "https://github.com/revanarc",
                    target: "_blank",
                    rel: "noopener",
                    "GitHub"
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let updated = site.read().bootstrap().last_updated_label();

    rsx! {
        footer { class: "footer",
            p { "RevanArc. Balance in all things." }
            if let Some(label) = updated {
                p { class: "last-updated", "{label}" }
            }
        }
    }
}
