//! Navigation Bar Component
//!
//! Desktop: brand, in-page links, duality switch
//! Mobile: links collapse behind the hamburger toggle

use dioxus::prelude::*;
use revanarc_core::ThemeMode;
use revanarc_ui::MenuToggle;

use crate::context::use_site;

/// In-page navigation targets
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    About,
    Knowledge,
    Projects,
    Contact,
}

impl NavLocation {
    pub const ALL: [NavLocation; 5] = [
        NavLocation::Home,
        NavLocation::About,
        NavLocation::Knowledge,
        NavLocation::Projects,
        NavLocation::Contact,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::About => "About",
            NavLocation::Knowledge => "Knowledge",
            NavLocation::Projects => "Projects",
            NavLocation::Contact => "Contact",
        }
    }

    /// Anchor of the section this link targets
    pub fn href(&self) -> &'static str {
        match self {
            NavLocation::Home => "#home",
            NavLocation::About => "#about",
            NavLocation::Knowledge => "#knowledge",
            NavLocation::Projects => "#projects",
            NavLocation::Contact => "#contact",
        }
    }
}

/// Navigation bar component
///
/// Hides while scrolling down, returns on scroll up, and highlights the
/// link of the section under the viewport midline.
#[component]
pub fn Navbar() -> Element {
    let mut site = use_site();

    let (class, menu_open, theme, active) = {
        let s = site.read();
        let nav = s.navigation();
        let mut class = String::from("navbar");
        if nav.layout().is_mobile() {
            class.push_str(" mobile-mode");
        }
        if let Some(dir) = nav.direction().navbar_class() {
            class.push(' ');
            class.push_str(dir);
        }
        let active: Vec<bool> = NavLocation::ALL
            .iter()
            .map(|loc| nav.is_link_active(loc.href()))
            .collect();
        (class, nav.menu_open(), s.bootstrap().theme(), active)
    };

    rsx! {
        nav { class: "{class}",
            a {
                class: "nav-brand",
                href: "#home",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    site.write().navigate_to("#home");
                },
                "RevanArc"
            }

            ul { class: if menu_open { "nav-links active" } else { "nav-links" },
                for (location, is_active) in NavLocation::ALL.into_iter().zip(active) {
                    li { key: "{location.href()}",
                        a {
                            class: if is_active { "nav-link active" } else { "nav-link" },
                            href: "{location.href()}",
                            "data-ripple": "nav-{location.display_name()}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                site.write().navigate_to(location.href());
                            },
                            "{location.display_name()}"
                        }
                    }
                }
            }

            button {
                class: if theme == ThemeMode::Red { "duality-switch red" } else { "duality-switch" },
                "aria-label": "Switch between blue and red team view",
                onclick: move |_| site.write().toggle_mode(),
            }

            MenuToggle {
                open: menu_open,
                onclick: move |_| {
                    site.write().toggle_menu();
                },
            }
        }
    }
}
