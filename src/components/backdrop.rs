use dioxus::prelude::*;
use revanarc_ui::{ParticleLayer, Starfield};

use crate::context::use_site;

/// Starfield and floating particles behind the page content.
#[component]
pub fn Backdrop() -> Element {
    let site = use_site();
    let s = site.read();
    let layers = s.starfield().to_vec();
    let offset = s.parallax();
    let particles = s.particles().particles().to_vec();
    let height = s.viewport().height;
    drop(s);

    rsx! {
        Starfield { layers, offset }
        ParticleLayer { particles, height }
    }
}
