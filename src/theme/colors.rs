//! Color constants for the RevanArc palette.

#![allow(dead_code)]

// === SPACE (Backgrounds) ===
pub const DEEP_SPACE: &str = "#05070d";
pub const SPACE_PANEL: &str = "#0c1120";
pub const SPACE_BORDER: &str = "#1b2338";

// === BLUE (Defence) ===
pub const BLUE: &str = "#4da3ff";
pub const BLUE_GLOW: &str = "rgba(77, 163, 255, 0.35)";

// === RED (Offence) ===
pub const RED: &str = "#e04848";
pub const RED_GLOW: &str = "rgba(224, 72, 72, 0.35)";

// === BRASS (Titles, Emblem Ring, Active State) ===
pub const BRASS: &str = "#c9a227";
pub const BRASS_GLOW: &str = "rgba(201, 162, 39, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#eef2ff";
pub const TEXT_SECONDARY: &str = "rgba(238, 242, 255, 0.72)";
pub const TEXT_MUTED: &str = "rgba(238, 242, 255, 0.5)";

// === NOTIFICATIONS ===
pub const SUCCESS: &str = "#3ecf8e";
pub const WARNING: &str = "#f5a524";
pub const INFO: &str = BLUE;
pub const DANGER: &str = RED;
