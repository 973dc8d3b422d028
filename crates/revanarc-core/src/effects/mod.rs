//! Decorative, self-terminating visual effects.
//!
//! Nothing here feeds back into view state. Each generator owns the nodes
//! it creates and prunes them once their animation has run.

pub mod emblem;
pub mod particles;
pub mod ripple;
pub mod starfield;

pub use emblem::Emblem;
pub use particles::{Particle, ParticleField};
pub use ripple::{ElementRect, Ripple, Ripples};
pub use starfield::{generate_starfield, Star, StarLayer};
