//! Property-based tests for filtering, scroll direction and resize debouncing

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use revanarc_core::{
    Filter, LayoutMode, Millis, NavigationController, ProjectCatalog, ProjectFilter,
    ScrollDirection, SiteConfig, SiteCoordinator,
};

fn coordinator() -> SiteCoordinator {
    SiteCoordinator::with_rng(
        SiteConfig::default(),
        ProjectCatalog::builtin(),
        StdRng::seed_from_u64(11),
    )
}

// ============================================================================
// Filter visibility
// ============================================================================

proptest! {
    #[test]
    fn visibility_matches_category_membership(
        tag in prop::sample::select(vec!["all", "knowledge", "blue", "red", "supply"])
    ) {
        let mut filter = ProjectFilter::new(ProjectCatalog::builtin());
        filter.select_filter(tag);

        let parsed = Filter::parse(tag);
        for project in filter.catalog().iter() {
            prop_assert_eq!(filter.is_visible(&project.id), parsed.matches(project));
            prop_assert_eq!(
                filter.presentation(&project.id).interactive,
                parsed.matches(project)
            );
        }
    }

    #[test]
    fn absent_tags_show_nothing(tag in "[a-z]{3,12}") {
        let catalog = ProjectCatalog::builtin();
        prop_assume!(tag != "all" && !catalog.has_category(&tag));

        let mut filter = ProjectFilter::new(catalog);
        prop_assert!(filter.select_filter(&tag).is_empty());
    }

    #[test]
    fn last_filter_wins(tags in prop::collection::vec(
        prop::sample::select(vec!["all", "knowledge", "blue", "red", "supply", "none"]),
        1..10,
    )) {
        let mut filter = ProjectFilter::new(ProjectCatalog::builtin());
        for tag in &tags {
            filter.select_filter(tag);
        }
        let last = tags.last().copied().unwrap_or("all");
        let mut fresh = ProjectFilter::new(ProjectCatalog::builtin());
        fresh.select_filter(last);
        prop_assert_eq!(filter.visible(), fresh.visible());
    }
}

// ============================================================================
// Scroll direction
// ============================================================================

proptest! {
    #[test]
    fn monotonic_increase_flips_to_down_once(
        steps in prop::collection::vec(1.0f64..200.0, 1..50)
    ) {
        let mut nav = NavigationController::new(80.0, 768.0);
        let mut offset = 0.0;
        let mut flips = Vec::new();
        for step in steps {
            offset += step;
            if let Some(d) = nav.record_scroll(offset) {
                flips.push(d);
            }
        }
        prop_assert_eq!(flips, vec![ScrollDirection::Down]);
    }

    #[test]
    fn direction_never_flips_without_opposing_delta(
        offsets in prop::collection::vec(1.0f64..5000.0, 2..40)
    ) {
        let mut nav = NavigationController::new(80.0, 768.0);
        let mut last = 0.0;
        for offset in offsets {
            let before = nav.direction();
            if let Some(now) = nav.record_scroll(offset) {
                match now {
                    ScrollDirection::Down => prop_assert!(offset > last),
                    ScrollDirection::Up => {
                        prop_assert_eq!(before, ScrollDirection::Down);
                        prop_assert!(offset < last);
                    }
                    ScrollDirection::None => prop_assert!(false, "offsets are positive"),
                }
            }
            last = offset;
        }
    }
}

// ============================================================================
// Resize debouncing
// ============================================================================

proptest! {
    #[test]
    fn resize_burst_evaluates_once_with_final_width(
        widths in prop::collection::vec(320.0f64..1920.0, 1..20),
        gap in 1u64..249,
    ) {
        let mut site = coordinator();
        site.start(1280.0, 800.0, 0);
        let base = site.layout_evaluations();

        let mut now: Millis = 1000;
        for &w in &widths {
            site.on_resize(w, 800.0, now);
            site.tick(now);
            now += gap;
        }
        prop_assert_eq!(site.layout_evaluations(), base);

        site.tick(now - gap + 250);
        prop_assert_eq!(site.layout_evaluations(), base + 1);

        let last = widths[widths.len() - 1];
        prop_assert_eq!(site.viewport().width, last);
        prop_assert_eq!(site.navigation().layout(), LayoutMode::for_width(last, 768.0));
    }
}
