//! Navigation bar state: active link, scroll direction, layout mode and
//! smooth-scroll targets.

use crate::types::{LayoutMode, ScrollDirection};
use crate::viewport::{ElementBox, Viewport};

/// Global keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Scroll to the section with this id
    Jump(&'static str),
    /// Close transient UI
    Dismiss,
}

impl Shortcut {
    pub fn for_key(key: &str, ctrl: bool, alt: bool) -> Option<Self> {
        match key {
            "Escape" => Some(Shortcut::Dismiss),
            _ if ctrl || alt => None,
            "h" | "H" => Some(Shortcut::Jump("home")),
            "p" | "P" => Some(Shortcut::Jump("projects")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    header_offset: f64,
    breakpoint: f64,
    sections: Vec<ElementBox>,
    active: Option<String>,
    direction: ScrollDirection,
    last_scroll: f64,
    layout: LayoutMode,
    menu_open: bool,
}

impl NavigationController {
    pub fn new(header_offset: f64, breakpoint: f64) -> Self {
        Self {
            header_offset,
            breakpoint,
            sections: Vec::new(),
            active: None,
            direction: ScrollDirection::None,
            last_scroll: 0.0,
            layout: LayoutMode::Desktop,
            menu_open: false,
        }
    }

    /// Replace the tracked sections (document order). Sections that have
    /// disappeared can no longer be active.
    pub fn set_sections(&mut self, sections: Vec<ElementBox>) {
        if let Some(ref id) = self.active {
            if !sections.iter().any(|s| &s.id == id) {
                self.active = None;
            }
        }
        self.sections = sections;
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the nav link with this `href` should carry `active`.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (href.strip_prefix('#'), self.active.as_deref()) {
            (Some(target), Some(active)) => target == active,
            _ => false,
        }
    }

    /// The section crossing the viewport midline, first in document order.
    /// When none crosses it the previous choice stands. Returns the new
    /// value when it changed.
    pub fn update_active(&mut self, viewport: &Viewport) -> Option<Option<String>> {
        let mid = viewport.midline();
        let hit = self.sections.iter().find(|s| s.crosses(mid))?;
        if self.active.as_deref() == Some(hit.id.as_str()) {
            return None;
        }
        self.active = Some(hit.id.clone());
        tracing::debug!(section = %hit.id, "Active section changed");
        Some(self.active.clone())
    }

    /// Feed one scroll offset sample. Direction is sticky: it only flips
    /// on an opposing delta, and resets at the very top.
    pub fn record_scroll(&mut self, offset: f64) -> Option<ScrollDirection> {
        let previous = self.direction;
        if offset <= 0.0 {
            self.direction = ScrollDirection::None;
        } else {
            if offset > self.last_scroll && self.direction != ScrollDirection::Down {
                self.direction = ScrollDirection::Down;
            } else if offset < self.last_scroll && self.direction == ScrollDirection::Down {
                self.direction = ScrollDirection::Up;
            }
            self.last_scroll = offset;
        }
        (self.direction != previous).then_some(self.direction)
    }

    /// Re-evaluate the layout for a settled viewport width.
    pub fn apply_width(&mut self, width: f64) -> Option<LayoutMode> {
        let layout = LayoutMode::for_width(width, self.breakpoint);
        if layout == self.layout {
            return None;
        }
        self.layout = layout;
        if !layout.is_mobile() {
            self.menu_open = false;
        }
        tracing::debug!(?layout, width, "Layout mode changed");
        Some(layout)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = self.layout.is_mobile() && !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scroll offset that puts `anchor` (`#id` or `id`) just below the
    /// fixed header. None for an unknown anchor.
    pub fn scroll_target(&self, anchor: &str) -> Option<f64> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| (s.top - self.header_offset).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavigationController {
        let mut nav = NavigationController::new(80.0, 768.0);
        nav.set_sections(vec![
            ElementBox::new("home", 0.0, 800.0),
            ElementBox::new("about", 800.0, 600.0),
            ElementBox::new("projects", 1400.0, 1000.0),
        ]);
        nav
    }

    #[test]
    fn active_section_follows_midline() {
        let mut nav = nav();
        assert_eq!(nav.update_active(&Viewport::new(0.0, 1280.0, 800.0)), Some(Some("home".into())));
        // Midline 400 + 400 = 800 -> about starts exactly there
        assert_eq!(nav.update_active(&Viewport::new(400.0, 1280.0, 800.0)), Some(Some("about".into())));
        assert_eq!(nav.update_active(&Viewport::new(410.0, 1280.0, 800.0)), None);
        assert!(nav.is_link_active("#about"));
        assert!(!nav.is_link_active("#home"));
        assert!(!nav.is_link_active("about"));
    }

    #[test]
    fn gap_between_sections_keeps_previous() {
        let mut nav = NavigationController::new(80.0, 768.0);
        nav.set_sections(vec![
            ElementBox::new("a", 0.0, 100.0),
            ElementBox::new("b", 500.0, 100.0),
        ]);
        nav.update_active(&Viewport::new(0.0, 800.0, 100.0));
        assert_eq!(nav.update_active(&Viewport::new(250.0, 800.0, 100.0)), None);
        assert_eq!(nav.active_section(), Some("a"));
    }

    #[test]
    fn overlapping_sections_first_wins() {
        let mut nav = NavigationController::new(80.0, 768.0);
        nav.set_sections(vec![
            ElementBox::new("first", 0.0, 1000.0),
            ElementBox::new("second", 200.0, 1000.0),
        ]);
        nav.update_active(&Viewport::new(100.0, 800.0, 600.0));
        assert_eq!(nav.active_section(), Some("first"));
    }

    #[test]
    fn direction_is_sticky() {
        let mut nav = nav();
        let flips: Vec<_> = [10.0, 20.0, 30.0, 40.0]
            .into_iter()
            .filter_map(|y| nav.record_scroll(y))
            .collect();
        assert_eq!(flips, vec![ScrollDirection::Down]);

        assert_eq!(nav.record_scroll(35.0), Some(ScrollDirection::Up));
        assert_eq!(nav.record_scroll(30.0), None);
        assert_eq!(nav.record_scroll(50.0), Some(ScrollDirection::Down));
        assert_eq!(nav.record_scroll(0.0), Some(ScrollDirection::None));
        assert_eq!(nav.direction().navbar_class(), None);
    }

    #[test]
    fn upward_from_neutral_does_not_flip() {
        let mut nav = nav();
        nav.record_scroll(100.0);
        nav.record_scroll(0.0);
        assert_eq!(nav.record_scroll(50.0), None);
    }

    #[test]
    fn layout_flips_once_across_breakpoint() {
        let mut nav = nav();
        assert_eq!(nav.apply_width(1024.0), None);
        assert_eq!(nav.apply_width(600.0), Some(LayoutMode::Mobile));
        assert_eq!(nav.apply_width(500.0), None);
        assert!(nav.toggle_menu());
        assert_eq!(nav.apply_width(1024.0), Some(LayoutMode::Desktop));
        assert!(!nav.menu_open());
        assert!(!nav.toggle_menu());
    }

    #[test]
    fn scroll_target_clears_header() {
        let nav = nav();
        assert_eq!(nav.scroll_target("#projects"), Some(1320.0));
        assert_eq!(nav.scroll_target("home"), Some(0.0));
        assert_eq!(nav.scroll_target("#missing"), None);
    }

    #[test]
    fn shortcuts() {
        assert_eq!(Shortcut::for_key("h", false, false), Some(Shortcut::Jump("home")));
        assert_eq!(Shortcut::for_key("P", false, false), Some(Shortcut::Jump("projects")));
        assert_eq!(Shortcut::for_key("p", true, false), None);
        assert_eq!(Shortcut::for_key("Escape", true, false), Some(Shortcut::Dismiss));
        assert_eq!(Shortcut::for_key("x", false, false), None);
    }
}
