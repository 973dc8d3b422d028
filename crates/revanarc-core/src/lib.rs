//! RevanArc Site Core Library
//!
//! View-state coordination for the interactive layer of the RevanArc site.
//!
//! ## Overview
//!
//! Every piece of the page reacts to a browser event: load, scroll,
//! resize, pointer, click. This crate holds the rules deciding, at any
//! moment, which project cards are interactive, which navigation link is
//! active, which knowledge-stage panel is shown and which decorative
//! effects are alive. It has no DOM dependency; the UI shell forwards
//! events into a [`SiteCoordinator`] and carries out the [`Effect`]s it
//! returns.
//!
//! ## Core Principles
//!
//! - **Run to completion**: one event at a time, no locks
//! - **Injected time**: every handler takes `now`, so timers are testable
//! - **Degrade silently**: unknown filters, stages or anchors are no-ops
//!
//! ## Quick Start
//!
//! ```
//! use revanarc_core::{CardRef, Effect, ProjectCatalog, SiteConfig, SiteCoordinator};
//!
//! let mut site = SiteCoordinator::new(SiteConfig::default(), ProjectCatalog::builtin());
//! site.start(1280.0, 800.0, 0);
//!
//! let visible = site.select_filter("red");
//! assert_eq!(visible.len(), 2);
//!
//! site.open_repository(&CardRef::with_id("hk47"), 0);
//! site.tick(300);
//! assert!(matches!(site.drain_effects().as_slice(), [Effect::OpenUrl { .. }]));
//! ```

pub mod analytics;
pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod effects;
pub mod error;
pub mod filter;
pub mod logging;
pub mod motion;
pub mod navigation;
pub mod scheduler;
pub mod signals;
pub mod stage;
pub mod types;
pub mod viewport;

// Re-exports
pub use bootstrap::{
    Bootstrap, DiagnosticRecord, LoadPhase, Notice, NoticeKind, PageEnvironment, Resource,
    WelcomeStep, RELOAD_PROMPT,
};
pub use catalog::{CardRef, ProjectCatalog};
pub use config::SiteConfig;
pub use coordinator::{Effect, SiteCoordinator, CONSTELLATION_EDGES};
pub use error::{SiteError, SiteResult};
pub use filter::{ButtonState, CardPresentation, ProjectFilter, RepoRequest, VisibilitySet};
pub use motion::MotionPreference;
pub use navigation::{NavigationController, Shortcut};
pub use signals::{SignalBus, SiteSignal, SubscriptionId};
pub use stage::{builtin_stages, Constellation, PanelPhase, StageInfo};
pub use types::*;
pub use viewport::{ElementBox, Viewport};
