//! Project filtering and repository link dispatch.
//!
//! Cards are never removed when filtered out. A suppressed card stays in
//! the grid, dimmed and non-interactive, so DOM identity and scroll
//! position survive a filter change.

use std::collections::HashMap;

use crate::catalog::{CardRef, ProjectCatalog};
use crate::types::{Filter, Project, ProjectId};

/// Ids of the fully interactive cards, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet(Vec<ProjectId>);

impl VisibilitySet {
    pub fn compute(catalog: &ProjectCatalog, filter: &Filter) -> Self {
        Self(
            catalog
                .iter()
                .filter(|p| filter.matches(p))
                .map(|p| p.id.clone())
                .collect(),
        )
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[ProjectId] {
        &self.0
    }
}

/// Visual treatment of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPresentation {
    pub opacity: f32,
    pub transform: &'static str,
    pub interactive: bool,
}

impl CardPresentation {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        transform: "scale(1) translateY(0)",
        interactive: true,
    };

    pub const SUPPRESSED: Self = Self {
        opacity: 0.3,
        transform: "scale(0.95) translateY(10px)",
        interactive: false,
    };

    /// Inline style for the card element
    pub fn style(&self) -> String {
        let pointer = if self.interactive { "auto" } else { "none" };
        format!(
            "opacity: {}; transform: {}; pointer-events: {};",
            self.opacity, self.transform, pointer
        )
    }
}

/// State of a card's repository button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    /// Waiting out the short delay before the repository opens
    Loading,
    /// Showing the "coming soon" notice
    ComingSoon,
}

impl ButtonState {
    pub fn label<'a>(&self, idle: &'a str) -> &'a str {
        match self {
            ButtonState::Idle => idle,
            ButtonState::Loading => "Opening...",
            ButtonState::ComingSoon => "Coming Soon!",
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            ButtonState::Idle => None,
            ButtonState::Loading => Some("loading"),
            ButtonState::ComingSoon => Some("coming-soon"),
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, ButtonState::Loading)
    }
}

/// What `open_repository` decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoRequest {
    /// The project resolved; the URL opens once the loading delay passes
    Opening { project: ProjectId, url: String },
    /// No project (or no repository) for this card
    ComingSoon { card: ProjectId },
    /// The button was already busy
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ProjectFilter {
    catalog: ProjectCatalog,
    filter: Filter,
    visible: VisibilitySet,
    buttons: HashMap<ProjectId, ButtonState>,
}

impl ProjectFilter {
    pub fn new(catalog: ProjectCatalog) -> Self {
        let filter = Filter::All;
        let visible = VisibilitySet::compute(&catalog, &filter);
        Self {
            catalog,
            filter,
            visible,
            buttons: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn visible(&self) -> &VisibilitySet {
        &self.visible
    }

    /// Apply a filter tag from a filter button. Unknown tags are accepted
    /// and simply match nothing.
    pub fn select_filter(&mut self, tag: &str) -> &VisibilitySet {
        let filter = Filter::parse(tag);
        if let Filter::Tag(ref t) = filter {
            if !self.catalog.has_category(t) {
                tracing::debug!(tag = %t, "Filter matches no project");
            }
        }
        self.visible = VisibilitySet::compute(&self.catalog, &filter);
        self.filter = filter;
        tracing::debug!(filter = %self.filter, visible = self.visible.len(), "Filter applied");
        &self.visible
    }

    pub fn is_visible(&self, id: &ProjectId) -> bool {
        self.visible.contains(id)
    }

    pub fn presentation(&self, id: &ProjectId) -> CardPresentation {
        if self.is_visible(id) {
            CardPresentation::VISIBLE
        } else {
            CardPresentation::SUPPRESSED
        }
    }

    /// Whether the filter button carrying `tag` is the active one.
    pub fn is_active_button(&self, tag: &str) -> bool {
        self.filter.as_str() == tag
    }

    pub fn visible_count_label(&self) -> String {
        let n = self.visible.len();
        format!("{} project{}", n, if n == 1 { "" } else { "s" })
    }

    pub fn projects_for(&self, filter: &Filter) -> Vec<&Project> {
        self.catalog.projects_for(filter)
    }

    pub fn button_state(&self, card: &ProjectId) -> ButtonState {
        self.buttons.get(card).copied().unwrap_or_default()
    }

    /// Handle activation of a card's repository button.
    pub fn open_repository(&mut self, card: &CardRef) -> RepoRequest {
        let key = card.resolve_id();
        if self.button_state(&key) == ButtonState::Loading {
            return RepoRequest::Ignored;
        }
        // Suppressed cards are non-interactive; unknown cards still fall
        // through to "coming soon".
        if self.catalog.get(&key).is_some() && !self.is_visible(&key) {
            tracing::debug!(project = %key, "Ignoring activation of suppressed card");
            return RepoRequest::Ignored;
        }

        let url = self
            .catalog
            .get(&key)
            .and_then(|p| p.repo_url.clone());

        match url {
            Some(url) => {
                tracing::debug!(project = %key, %url, "Opening repository");
                self.buttons.insert(key.clone(), ButtonState::Loading);
                RepoRequest::Opening { project: key, url }
            }
            None => {
                tracing::warn!(card = %key, "No repository found for project");
                self.buttons.insert(key.clone(), ButtonState::ComingSoon);
                RepoRequest::ComingSoon { card: key }
            }
        }
    }

    /// The loading delay for `project` elapsed. Returns the URL to open,
    /// or None if the button was reset in the meantime.
    pub fn finish_open(&mut self, project: &ProjectId) -> Option<String> {
        if self.button_state(project) != ButtonState::Loading {
            return None;
        }
        self.buttons.remove(project);
        self.catalog.get(project).and_then(|p| p.repo_url.clone())
    }

    pub fn clear_coming_soon(&mut self, card: &ProjectId) {
        if self.button_state(card) == ButtonState::ComingSoon {
            self.buttons.remove(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> ProjectFilter {
        ProjectFilter::new(ProjectCatalog::builtin())
    }

    #[test]
    fn starts_with_everything_visible() {
        let f = filter();
        assert_eq!(f.visible().len(), 6);
        assert!(f.is_active_button("all"));
        assert_eq!(f.visible_count_label(), "6 projects");
    }

    #[test]
    fn tag_filter_keeps_catalog_order() {
        let mut f = filter();
        let ids: Vec<&str> = f.select_filter("blue").ids().iter().map(|i| i.as_str()).collect();
        assert_eq!(ids, vec!["phalanx", "starmap", "veritas"]);
        assert!(f.is_active_button("blue"));
        assert!(!f.is_active_button("all"));
    }

    #[test]
    fn unknown_tag_suppresses_everything() {
        let mut f = filter();
        assert!(f.select_filter("purple").is_empty());
        assert_eq!(f.presentation(&"phalanx".into()), CardPresentation::SUPPRESSED);
        assert_eq!(f.visible_count_label(), "0 projects");
    }

    #[test]
    fn singular_count_label() {
        let mut f = filter();
        f.select_filter("supply");
        assert_eq!(f.visible_count_label(), "1 project");
    }

    #[test]
    fn suppressed_style_disables_pointer() {
        let style = CardPresentation::SUPPRESSED.style();
        assert!(style.contains("opacity: 0.3"));
        assert!(style.contains("pointer-events: none"));
        assert!(CardPresentation::VISIBLE.style().contains("pointer-events: auto"));
    }

    #[test]
    fn open_known_project_goes_through_loading() {
        let mut f = filter();
        let req = f.open_repository(&CardRef::with_id("hk47"));
        assert_eq!(
            req,
            RepoRequest::Opening {
                project: "hk47".into(),
                url: "https://github.com/RevanArc/hk47".into()
            }
        );
        assert_eq!(f.button_state(&"hk47".into()), ButtonState::Loading);
        assert!(f.button_state(&"hk47".into()).disabled());

        // Double activation while loading is ignored
        assert_eq!(f.open_repository(&CardRef::legacy("HK-47")), RepoRequest::Ignored);

        assert_eq!(
            f.finish_open(&"hk47".into()).as_deref(),
            Some("https://github.com/RevanArc/hk47")
        );
        assert_eq!(f.button_state(&"hk47".into()), ButtonState::Idle);
        assert_eq!(f.finish_open(&"hk47".into()), None);
    }

    #[test]
    fn suppressed_card_cannot_be_activated() {
        let mut f = filter();
        f.select_filter("blue");
        assert_eq!(f.open_repository(&CardRef::with_id("hk47")), RepoRequest::Ignored);
        assert_eq!(f.button_state(&"hk47".into()), ButtonState::Idle);

        f.select_filter("red");
        assert!(matches!(
            f.open_repository(&CardRef::with_id("hk47")),
            RepoRequest::Opening { .. }
        ));
    }

    #[test]
    fn open_unknown_project_is_coming_soon() {
        let mut f = filter();
        let req = f.open_repository(&CardRef::legacy("Holocron"));
        assert_eq!(req, RepoRequest::ComingSoon { card: "holocron".into() });
        assert_eq!(f.button_state(&"holocron".into()).label("View"), "Coming Soon!");
        f.clear_coming_soon(&"holocron".into());
        assert_eq!(f.button_state(&"holocron".into()), ButtonState::Idle);
    }
}
