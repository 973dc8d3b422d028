//! Core types for the RevanArc site

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Monotonic timestamp in milliseconds, supplied by the caller.
///
/// The core never reads a clock itself; every handler receives `now` so
/// deferred behaviour is deterministic under test.
pub type Millis = u64;

/// Unique identifier for a project in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an id from a card title the way legacy markup expects:
    /// lowercase ASCII alphanumerics only.
    pub fn from_title(title: &str) -> Self {
        Self(normalize_key(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Lowercase and strip everything except `[a-z0-9]`.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Development status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Development,
    Planning,
}

impl ProjectStatus {
    /// Badge label shown on the card
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Development => "In Development",
            ProjectStatus::Planning => "Planning",
        }
    }

    /// CSS modifier class for the badge
    pub fn class(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "status-active",
            ProjectStatus::Development => "status-development",
            ProjectStatus::Planning => "status-planning",
        }
    }
}

/// A portfolio project. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Category tags used by the filter controls
    pub categories: BTreeSet<String>,
    /// Display tags, in presentation order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Emoji or image path
    pub icon: String,
    /// Repository URL; projects without one are "coming soon"
    #[serde(default, rename = "repo")]
    pub repo_url: Option<String>,
    pub status: ProjectStatus,
}

impl Project {
    pub fn in_category(&self, tag: &str) -> bool {
        self.categories.contains(tag)
    }

    /// Space-separated category list as carried by the card markup
    pub fn category_attr(&self) -> String {
        self.categories
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The current project filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Sentinel: every project is visible
    #[default]
    All,
    /// Only projects carrying this category are visible
    Tag(String),
}

impl Filter {
    pub const ALL: &'static str = "all";

    /// Parse a raw filter-tag attribute. Never fails: any value other than
    /// `"all"` is a tag, even one no project carries.
    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL {
            Filter::All
        } else {
            Filter::Tag(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => Self::ALL,
            Filter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(tag) => project.in_category(tag),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical scroll direction derived from consecutive offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

impl ScrollDirection {
    /// Navbar class for this direction
    pub fn navbar_class(&self) -> Option<&'static str> {
        match self {
            ScrollDirection::Up => Some("scroll-up"),
            ScrollDirection::Down => Some("scroll-down"),
            ScrollDirection::None => None,
        }
    }
}

/// Responsive layout derived from viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Desktop,
    Mobile,
}

impl LayoutMode {
    /// Classify a width against the breakpoint (inclusive for mobile).
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, LayoutMode::Mobile)
    }
}

/// Identifier of a knowledge stage panel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageId(pub String);

impl StageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The site's two-tone "duality" mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Blue,
    Red,
}

impl ThemeMode {
    /// Value for `<meta name="theme-color">`
    pub fn theme_color(&self) -> &'static str {
        match self {
            ThemeMode::Blue => "#4da3ff",
            ThemeMode::Red => "#e04848",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_strips_punctuation_and_case() {
        assert_eq!(normalize_key("HK-47"), "hk47");
        assert_eq!(normalize_key("  LMBoM "), "lmbom");
        assert_eq!(normalize_key("Star_Map!"), "starmap");
        assert_eq!(normalize_key("---"), "");
    }

    #[test]
    fn filter_parse_all_sentinel() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("red"), Filter::Tag("red".into()));
        // Sentinel is case-sensitive like the markup attribute
        assert_eq!(Filter::parse("All"), Filter::Tag("All".into()));
    }

    #[test]
    fn layout_breakpoint_is_inclusive() {
        assert_eq!(LayoutMode::for_width(768.0, 768.0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_width(769.0, 768.0), LayoutMode::Desktop);
    }

    #[test]
    fn project_status_serde_lowercase() {
        let status: ProjectStatus = serde_json::from_str("\"planning\"").unwrap();
        assert_eq!(status, ProjectStatus::Planning);
        assert_eq!(serde_json::to_string(&ProjectStatus::Active).unwrap(), "\"active\"");
    }
}
