//! RevanArc UI Components
//!
//! Presentational Dioxus components for the RevanArc site. Components here
//! take plain props and event handlers; the view-state they render comes
//! from `revanarc-core` and is wired up by the application shell.
//!
//! ## Design Language
//!
//! The site balances two halves of one emblem:
//! - **Blue (#4da3ff)**: defence, architecture, evaluation
//! - **Red (#e04848)**: adversarial testing, offence
//! - **Brass (#c9a227)**: titles, the emblem ring, active state
//! - **Deep Space (#05070d)**: background behind the starfield

pub mod components;

pub use components::*;
