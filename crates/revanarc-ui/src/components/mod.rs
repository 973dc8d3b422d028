//! Reusable UI components
//!
//! Class names match the site stylesheet (`.cta-button`, `.filter-btn`,
//! `.knowledge-node` and friends).

mod backdrop;
mod button;
mod constellation;
mod emblem;
mod filter_pills;
mod status_badge;

pub use backdrop::*;
pub use button::*;
pub use constellation::*;
pub use emblem::*;
pub use filter_pills::*;
pub use status_badge::*;
