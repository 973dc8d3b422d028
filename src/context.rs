//! Site context for RevanArc.
//!
//! Provides the `SiteCoordinator` and the page clock to every component
//! via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut site = use_site();
//! let clock = use_clock();
//! site.write().select_stage(&stage, clock.now());
//! ```

use std::time::Instant;

use dioxus::prelude::*;
use revanarc_core::{Millis, SiteCoordinator};

/// Monotonic page clock. Every coordinator call takes its `now` from here.
#[derive(Clone, Copy, Debug)]
pub struct PageClock {
    started: Instant,
}

impl PageClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds since the page started.
    pub fn now(&self) -> Millis {
        self.started.elapsed().as_millis() as Millis
    }
}

impl Default for PageClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the coordinator from context.
///
/// Reads subscribe the calling component to every coordinator change, so
/// components should read once per render and copy out what they need.
pub fn use_site() -> Signal<SiteCoordinator> {
    use_context::<Signal<SiteCoordinator>>()
}

pub fn use_clock() -> PageClock {
    use_context::<PageClock>()
}
