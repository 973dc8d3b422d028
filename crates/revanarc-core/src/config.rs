//! Site configuration.
//!
//! Every tunable of the interactive layer lives here so the binary can
//! override it from a JSON file. Missing keys fall back to the defaults
//! below.
//!
//! ```json
//! { "mobile_breakpoint": 900, "particle_count": 10 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::types::Millis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Height of the fixed header that smooth-scroll targets clear
    pub header_offset: f64,
    /// Widths at or below this are laid out as mobile
    pub mobile_breakpoint: f64,
    pub resize_quiet_ms: Millis,
    pub stage_auto_select_ms: Millis,
    /// Delay before a newly shown stage panel settles into place
    pub stage_entry_ms: Millis,
    pub repo_open_delay_ms: Millis,
    pub coming_soon_ms: Millis,
    pub notification_ms: Millis,
    pub ripple_ms: Millis,
    pub emblem_release_ms: Millis,
    pub loading_fade_ms: Millis,
    pub last_updated_interval_ms: Millis,
    pub particle_count: usize,
    pub star_layers: usize,
    pub parallax_factor: f64,
    /// Reveal observation viewport is shrunk by this much at the bottom
    pub reveal_bottom_margin: f64,
    /// Fraction of an element that must be inside the reveal viewport
    pub reveal_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            mobile_breakpoint: 768.0,
            resize_quiet_ms: 250,
            stage_auto_select_ms: 500,
            stage_entry_ms: 50,
            repo_open_delay_ms: 300,
            coming_soon_ms: 2000,
            notification_ms: 3000,
            ripple_ms: 600,
            emblem_release_ms: 500,
            loading_fade_ms: 1000,
            last_updated_interval_ms: 60_000,
            particle_count: 20,
            star_layers: 3,
            parallax_factor: 0.5,
            reveal_bottom_margin: 100.0,
            reveal_threshold: 0.1,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.as_ref().display(), "Loaded site config");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> SiteResult<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> SiteResult<()> {
        if !(self.mobile_breakpoint.is_finite() && self.mobile_breakpoint > 0.0) {
            return Err(SiteError::Config(format!(
                "mobile_breakpoint must be positive, got {}",
                self.mobile_breakpoint
            )));
        }
        if !(self.header_offset.is_finite() && self.header_offset >= 0.0) {
            return Err(SiteError::Config(format!(
                "header_offset must be non-negative, got {}",
                self.header_offset
            )));
        }
        if !(self.parallax_factor.is_finite() && self.parallax_factor >= 0.0) {
            return Err(SiteError::Config(format!(
                "parallax_factor must be non-negative, got {}",
                self.parallax_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SiteError::Config(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        if self.particle_count == 0 {
            return Err(SiteError::Config("particle_count must be at least 1".into()));
        }
        Ok(())
    }
}
