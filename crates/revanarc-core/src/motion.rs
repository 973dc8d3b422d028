//! Reduced-motion preference.

/// Stylesheet injected while reduced motion is on.
pub const REDUCED_MOTION_CSS: &str = r#"
.reduced-motion * {
  animation-duration: 0.01ms !important;
  animation-iteration-count: 1 !important;
  transition-duration: 0.01ms !important;
}
"#;

/// Tracks the OS reduced-motion setting for the lifetime of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    pub fn reduced(&self) -> bool {
        self.reduced
    }

    pub fn animations_enabled(&self) -> bool {
        !self.reduced
    }

    /// Apply a (possibly repeated) OS notification. Returns true when the
    /// value actually changed.
    pub fn set(&mut self, reduced: bool) -> bool {
        if self.reduced == reduced {
            return false;
        }
        self.reduced = reduced;
        tracing::info!(reduced, "Motion preference changed");
        true
    }

    /// Scale a nominal duration. Reduced motion collapses it to zero.
    pub fn scale(&self, ms: u64) -> u64 {
        if self.reduced {
            0
        } else {
            ms
        }
    }

    pub fn body_class(&self) -> Option<&'static str> {
        self.reduced.then_some("reduced-motion")
    }

    pub fn override_css(&self) -> Option<&'static str> {
        self.reduced.then_some(REDUCED_MOTION_CSS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_and_reports_changes_only() {
        let mut m = MotionPreference::default();
        assert!(m.animations_enabled());
        assert!(!m.set(false));
        assert!(m.set(true));
        assert!(!m.set(true));
        assert_eq!(m.body_class(), Some("reduced-motion"));
        assert_eq!(m.scale(600), 0);
        assert!(m.set(false));
        assert!(m.override_css().is_none());
        assert_eq!(m.scale(600), 600);
    }
}
