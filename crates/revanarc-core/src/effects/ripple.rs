//! Hover ripples on interactive elements.
//!
//! Re-triggering never cancels a ripple that is still animating; several
//! may overlap on the same element.

use crate::types::Millis;

/// Client-space bounding box of the element that was entered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub id: u64,
    /// Key of the element the ripple belongs to
    pub element: String,
    /// Position relative to the element
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub expires_at: Millis,
}

impl Ripple {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px;",
            self.left, self.top, self.size, self.size
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Ripples {
    active: Vec<Ripple>,
    next_id: u64,
}

impl Ripples {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a ripple centred on the pointer at client `(x, y)`.
    pub fn spawn(
        &mut self,
        element: impl Into<String>,
        rect: ElementRect,
        x: f64,
        y: f64,
        now: Millis,
        duration: Millis,
    ) -> u64 {
        let size = rect.width.max(rect.height) * 2.0;
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Ripple {
            id,
            element: element.into(),
            left: x - rect.left - size / 2.0,
            top: y - rect.top - size / 2.0,
            size,
            expires_at: now.saturating_add(duration),
        });
        id
    }

    /// Drop finished ripples; returns how many were removed.
    pub fn prune(&mut self, now: Millis) -> usize {
        let before = self.active.len();
        self.active.retain(|r| r.expires_at > now);
        before - self.active.len()
    }

    pub fn for_element<'a>(&'a self, element: &'a str) -> impl Iterator<Item = &'a Ripple> + 'a {
        self.active.iter().filter(move |r| r.element == element)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: ElementRect = ElementRect {
        left: 100.0,
        top: 50.0,
        width: 120.0,
        height: 40.0,
    };

    #[test]
    fn ripple_geometry_centres_on_pointer() {
        let mut r = Ripples::new();
        r.spawn("cta", BUTTON, 160.0, 70.0, 0, 600);
        let ripple = r.for_element("cta").next().unwrap();
        assert_eq!(ripple.size, 240.0);
        assert_eq!(ripple.left, 160.0 - 100.0 - 120.0);
        assert_eq!(ripple.top, 70.0 - 50.0 - 120.0);
    }

    #[test]
    fn rapid_retrigger_overlaps_then_expires() {
        let mut r = Ripples::new();
        r.spawn("cta", BUTTON, 110.0, 60.0, 0, 600);
        r.spawn("cta", BUTTON, 120.0, 60.0, 100, 600);
        r.spawn("nav", BUTTON, 120.0, 60.0, 100, 600);
        assert_eq!(r.for_element("cta").count(), 2);

        assert_eq!(r.prune(599), 0);
        assert_eq!(r.prune(600), 1);
        assert_eq!(r.prune(700), 2);
        assert!(r.is_empty());
    }
}
