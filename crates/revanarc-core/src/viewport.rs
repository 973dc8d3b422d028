//! Viewport geometry, scroll coalescing and resize debouncing.
//!
//! All geometry is document-relative: an element's `top` is its offset from
//! the top of the page, and the viewport is the window `[scroll_y,
//! scroll_y + height)`.

use std::collections::HashMap;

use crate::types::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, width: f64, height: f64) -> Self {
        Self {
            scroll_y,
            width,
            height,
        }
    }

    /// Document y of the viewport's vertical centre
    pub fn midline(&self) -> f64 {
        self.scroll_y + self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }
}

/// Vertical extent of a tracked element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the horizontal line at document y `y` passes through this box.
    pub fn crosses(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom()
    }

    /// Fraction of the box inside the band `[from, to)`.
    pub fn visible_ratio(&self, from: f64, to: f64) -> f64 {
        let overlap = self.bottom().min(to) - self.top.max(from);
        if self.height <= 0.0 {
            return if self.top >= from && self.top < to { 1.0 } else { 0.0 };
        }
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

/// Starfield translation for a scroll offset.
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

/// Coalesces bursts of scroll events into at most one update per frame.
#[derive(Debug, Clone, Default)]
pub struct FrameCoalescer {
    pending: Option<f64>,
}

impl FrameCoalescer {
    /// Record a sample. Returns true when this is the first sample since
    /// the last frame, i.e. the caller should request an animation frame.
    pub fn push(&mut self, offset: f64) -> bool {
        let first = self.pending.is_none();
        self.pending = Some(offset);
        first
    }

    /// Called from the frame callback: the latest sample, if any.
    pub fn take(&mut self) -> Option<f64> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Quiet-period debouncer. Each new value replaces the pending one and
/// restarts the quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Millis,
    pending: Option<(T, Millis)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Millis) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: Millis) {
        self.pending = Some((value, now.saturating_add(self.quiet)));
    }

    /// Returns the settled value once the quiet period has elapsed.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        let settled = matches!(self.pending, Some((_, deadline)) if deadline <= now);
        if settled {
            self.pending.take().map(|(v, _)| v)
        } else {
            None
        }
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref().map(|(_, d)| *d)
    }
}

/// Tracks which elements are inside a (possibly shrunk) viewport, the way
/// an intersection observer with a bottom root margin and a threshold
/// would.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    bottom_margin: f64,
    threshold: f64,
    state: HashMap<String, bool>,
}

impl VisibilityTracker {
    pub fn new(bottom_margin: f64, threshold: f64) -> Self {
        Self {
            bottom_margin,
            threshold,
            state: HashMap::new(),
        }
    }

    fn intersecting(&self, viewport: &Viewport, el: &ElementBox) -> bool {
        let from = viewport.scroll_y;
        let to = viewport.bottom() - self.bottom_margin;
        if to <= from {
            return false;
        }
        let ratio = el.visible_ratio(from, to);
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }

    /// Re-evaluate every element. Returns the ones whose state flipped.
    pub fn update(&mut self, viewport: &Viewport, elements: &[ElementBox]) -> Vec<(String, bool)> {
        let mut changed = Vec::new();
        for el in elements {
            let now_visible = self.intersecting(viewport, el);
            let prev = self.state.insert(el.id.clone(), now_visible);
            if prev != Some(now_visible) {
                changed.push((el.id.clone(), now_visible));
            }
        }
        changed
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.state.get(id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coalescer_requests_one_frame_per_burst() {
        let mut c = FrameCoalescer::default();
        assert!(c.push(10.0));
        assert!(!c.push(20.0));
        assert!(!c.push(30.0));
        assert_eq!(c.take(), Some(30.0));
        assert_eq!(c.take(), None);
        assert!(c.push(40.0));
    }

    #[test]
    fn debouncer_only_settles_after_quiet_period() {
        let mut d = Debouncer::new(250);
        d.push(1024.0, 0);
        d.push(900.0, 100);
        d.push(600.0, 200);
        assert_eq!(d.poll(449), None);
        assert_eq!(d.poll(450), Some(600.0));
        assert_eq!(d.poll(1000), None);
    }

    #[test]
    fn visible_ratio_partial_overlap() {
        let el = ElementBox::new("card", 900.0, 200.0);
        assert!((el.visible_ratio(0.0, 1000.0) - 0.5).abs() < 1e-9);
        assert_eq!(el.visible_ratio(0.0, 800.0), 0.0);
        assert_eq!(el.visible_ratio(0.0, 2000.0), 1.0);
    }

    #[test]
    fn reveal_respects_bottom_margin_and_threshold() {
        let mut t = VisibilityTracker::new(100.0, 0.1);
        let card = ElementBox::new("card", 880.0, 100.0);
        // Band is [0, 900): 20% visible
        let changed = t.update(&Viewport::new(0.0, 1280.0, 1000.0), &[card.clone()]);
        assert_eq!(changed, vec![("card".to_string(), true)]);

        // Band is [0, 785): not visible
        let changed = t.update(&Viewport::new(0.0, 1280.0, 885.0), &[card.clone()]);
        assert_eq!(changed, vec![("card".to_string(), false)]);
        assert!(!t.is_visible("card"));

        // No change, nothing reported
        assert!(t.update(&Viewport::new(0.0, 1280.0, 885.0), &[card]).is_empty());
    }

    #[test]
    fn parallax_is_half_scroll() {
        assert_eq!(parallax_offset(400.0, 0.5), 200.0);
    }
}
