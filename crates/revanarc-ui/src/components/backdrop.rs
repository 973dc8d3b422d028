//! Background layers: starfield, floating particles and hover ripples.

use dioxus::prelude::*;
use revanarc_core::effects::{Particle, Ripple, StarLayer};

#[derive(Clone, PartialEq, Props)]
pub struct StarfieldProps {
    pub layers: Vec<StarLayer>,
    /// Parallax translation in px
    pub offset: f64,
}

/// Fixed starfield behind the page, translated by the parallax offset.
#[component]
pub fn Starfield(props: StarfieldProps) -> Element {
    let transform = format!("transform: translateY({:.1}px);", props.offset);

    rsx! {
        div {
            class: "starfield",
            style: "{transform}",
            "aria-hidden": "true",
            for layer in props.layers.iter() {
                div { key: "{layer.index}", class: "{layer.class()}",
                    for (i, star) in layer.stars.iter().enumerate() {
                        div { key: "{i}", class: "dynamic-star", style: "{star.style()}" }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ParticleLayerProps {
    pub particles: Vec<Particle>,
    /// Viewport height; particles start just below it
    pub height: f64,
}

#[component]
pub fn ParticleLayer(props: ParticleLayerProps) -> Element {
    rsx! {
        div { class: "particle-container", "aria-hidden": "true",
            for particle in props.particles.iter() {
                div {
                    key: "{particle.id}",
                    class: "floating-particle",
                    style: "{particle.style(props.height)}",
                }
            }
        }
    }
}

/// One expanding ripple inside the element that spawned it.
#[component]
pub fn RippleSpan(ripple: Ripple) -> Element {
    rsx! {
        span { class: "hover-ripple", style: "{ripple.style()}" }
    }
}
