//! Degenerate inputs the site must absorb without failing.

use rand::rngs::StdRng;
use rand::SeedableRng;
use revanarc_core::{
    CardRef, ElementBox, PageEnvironment, Project, ProjectCatalog, ProjectId, ProjectStatus,
    SiteConfig, SiteCoordinator, SiteError, StageId,
};

fn site_with(catalog: ProjectCatalog) -> SiteCoordinator {
    SiteCoordinator::with_rng(SiteConfig::default(), catalog, StdRng::seed_from_u64(7))
}

fn bare_project(id: &str, categories: &[&str], repo: Option<&str>) -> Project {
    Project {
        id: ProjectId::new(id),
        title: id.to_uppercase(),
        description: String::new(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        tags: Vec::new(),
        icon: String::new(),
        repo_url: repo.map(str::to_string),
        status: ProjectStatus::Planning,
    }
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn unknown_filter_hides_everything() {
    let mut site = site_with(ProjectCatalog::builtin());
    assert!(site.select_filter("purple").is_empty());
    assert_eq!(site.projects().visible_count_label(), "0 projects");
    assert!(site.projects().is_active_button("purple"));
    assert!(!site.projects().is_active_button("all"));

    assert_eq!(site.select_filter("all").len(), 6);
}

#[test]
fn filter_tags_are_case_sensitive() {
    let mut site = site_with(ProjectCatalog::builtin());
    assert!(site.select_filter("Red").is_empty());
}

#[test]
fn empty_catalog_is_valid() {
    let mut site = site_with(ProjectCatalog::new(Vec::new()).unwrap());
    assert!(site.select_filter("all").is_empty());
    site.open_repository(&CardRef::legacy("Anything"), 0);
    site.tick(5000);
    assert!(site.drain_effects().is_empty());
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = ProjectCatalog::new(vec![
        bare_project("hk47", &["red"], None),
        bare_project("hk47", &["blue"], None),
    ])
    .unwrap_err();
    assert!(matches!(err, SiteError::DuplicateProject(id) if id == "hk47"));
}

// ============================================================================
// Repository buttons
// ============================================================================

#[test]
fn project_without_repository_is_coming_soon() {
    let catalog = ProjectCatalog::new(vec![bare_project("drafts", &["red"], None)]).unwrap();
    let mut site = site_with(catalog);
    let card = CardRef::with_id("drafts");
    site.open_repository(&card, 0);
    assert_eq!(
        site.projects().button_state(&ProjectId::new("drafts")).label("View"),
        "Coming Soon!"
    );
    site.tick(300);
    assert!(site.drain_effects().is_empty());
}

#[test]
fn blank_id_attribute_falls_back_to_title() {
    let mut site = site_with(ProjectCatalog::builtin());
    let card = CardRef {
        project_id: Some("   ".into()),
        title: "Phalanx".into(),
    };
    site.open_repository(&card, 0);
    site.tick(300);
    assert_eq!(site.drain_effects().len(), 1);
}

#[test]
fn cards_have_independent_button_state() {
    let mut site = site_with(ProjectCatalog::builtin());
    site.open_repository(&CardRef::with_id("hk47"), 0);
    site.open_repository(&CardRef::with_id("veritas"), 100);
    site.tick(300);
    assert_eq!(site.drain_effects().len(), 1);
    assert_eq!(
        site.projects().button_state(&ProjectId::new("veritas")).label("View"),
        "Opening..."
    );
    site.tick(400);
    assert_eq!(site.drain_effects().len(), 1);
}

// ============================================================================
// Navigation and stages
// ============================================================================

#[test]
fn unknown_anchor_and_stage_are_ignored() {
    let mut site = site_with(ProjectCatalog::builtin());
    site.set_sections(vec![ElementBox::new("home", 0.0, 900.0)]);
    assert!(!site.navigate_to("#contact"));
    assert!(!site.select_stage(&StageId::new("transcendence"), 0));
    assert!(site.constellation().active_stage().is_none());
    assert!(site.drain_effects().is_empty());
}

#[test]
fn missing_sections_leave_no_active_link() {
    let mut site = site_with(ProjectCatalog::builtin());
    site.start(1280.0, 800.0, 0);
    site.on_scroll(500.0);
    site.on_frame();
    assert!(site.navigation().active_section().is_none());
    assert!(!site.navigation().is_link_active("#home"));
}

#[test]
fn removed_section_clears_active_link() {
    let mut site = site_with(ProjectCatalog::builtin());
    site.start(1280.0, 800.0, 0);
    site.set_sections(vec![ElementBox::new("home", 0.0, 900.0)]);
    site.on_frame();
    assert_eq!(site.navigation().active_section(), Some("home"));

    site.set_sections(vec![ElementBox::new("about", 2000.0, 500.0)]);
    site.on_frame();
    assert!(site.navigation().active_section().is_none());
}

#[test]
fn scroll_to_top_resets_direction() {
    let mut site = site_with(ProjectCatalog::builtin());
    site.on_scroll(300.0);
    site.on_frame();
    site.on_scroll(0.0);
    site.on_frame();
    assert_eq!(site.navigation().direction(), revanarc_core::ScrollDirection::None);
}

#[test]
fn menu_only_opens_in_mobile_layout() {
    let mut site = site_with(ProjectCatalog::builtin());
    site.start(1280.0, 800.0, 0);
    assert!(!site.toggle_menu());

    site.on_resize(768.0, 800.0, 0);
    site.tick(250);
    assert!(site.toggle_menu());
    assert!(site.key_down("Escape", false, false));
    assert!(!site.navigation().menu_open());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn error_without_details_uses_placeholders() {
    let mut site = site_with(ProjectCatalog::builtin());
    site.report_error(Some(""), None, &PageEnvironment::default(), chrono::Utc::now());
    assert!(site.bootstrap().reload_prompt());
}

#[test]
fn invalid_config_is_reported() {
    let err = SiteConfig::from_json_str(r#"{"mobile_breakpoint": -1}"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}
