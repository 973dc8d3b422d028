//! Two-tone emblem glow.

use crate::types::Millis;

const BLUE_GLOW: &str = "0 0 40px rgba(77, 163, 255, 0.8)";
const RED_GLOW: &str = "0 0 40px rgba(224, 72, 72, 0.8)";

/// Hover state of the logo emblem.
///
/// Entering powers the emblem and lights both halves. Leaving drops the
/// glow at once but keeps the `emblem-powered` pulse until the release
/// delay has passed, unless the pointer comes back first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emblem {
    hovered: bool,
    powered: bool,
    release_at: Option<Millis>,
}

impl Emblem {
    pub fn enter(&mut self) {
        self.hovered = true;
        self.powered = true;
        self.release_at = None;
    }

    pub fn leave(&mut self, now: Millis, release_delay: Millis) {
        self.hovered = false;
        if self.powered {
            self.release_at = Some(now.saturating_add(release_delay));
        }
    }

    /// Advance time; returns true if the powered state was released.
    pub fn tick(&mut self, now: Millis) -> bool {
        match self.release_at {
            Some(at) if at <= now => {
                self.release_at = None;
                self.powered = false;
                true
            }
            _ => false,
        }
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn powered(&self) -> bool {
        self.powered
    }

    pub fn left_glow(&self) -> Option<&'static str> {
        self.hovered.then_some(BLUE_GLOW)
    }

    pub fn right_glow(&self) -> Option<&'static str> {
        self.hovered.then_some(RED_GLOW)
    }

    pub fn class(&self) -> &'static str {
        if self.powered {
            "revan-emblem emblem-powered"
        } else {
            "revan-emblem"
        }
    }
}
