//! Benchmarks for the view-state coordinator
//!
//! Run with: cargo bench -p revanarc-core
//!
//! These benchmarks establish baselines for:
//! - Visibility recomputation on filter change
//! - One coalesced scroll frame over many tracked elements

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use revanarc_core::{ElementBox, Project, ProjectCatalog, ProjectId, ProjectStatus, SiteConfig, SiteCoordinator};

fn catalog(size: usize) -> ProjectCatalog {
    let projects = (0..size)
        .map(|i| Project {
            id: ProjectId::new(format!("p{i}")),
            title: format!("Project {i}"),
            description: String::new(),
            categories: [["red", "blue", "supply", "knowledge"][i % 4].to_string()]
                .into_iter()
                .collect(),
            tags: Vec::new(),
            icon: String::new(),
            repo_url: None,
            status: ProjectStatus::Active,
        })
        .collect();
    ProjectCatalog::new(projects).expect("unique ids")
}

// ============================================================================
// Filter Benchmarks
// ============================================================================

fn bench_select_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_filter");
    for size in [6usize, 100, 1000] {
        let mut site = SiteCoordinator::with_rng(SiteConfig::default(), catalog(size), StdRng::seed_from_u64(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(site.select_filter("red").len()))
        });
    }
    group.finish();
}

// ============================================================================
// Frame Benchmarks
// ============================================================================

fn bench_scroll_frame(c: &mut Criterion) {
    let mut site = SiteCoordinator::with_rng(SiteConfig::default(), ProjectCatalog::builtin(), StdRng::seed_from_u64(1));
    site.start(1280.0, 800.0, 0);
    site.set_sections((0..10).map(|i| ElementBox::new(format!("s{i}"), i as f64 * 900.0, 900.0)).collect());
    site.set_reveal_targets((0..200).map(|i| ElementBox::new(format!("r{i}"), i as f64 * 45.0, 40.0)).collect());

    let mut offset = 0.0;
    c.bench_function("scroll_frame", |b| {
        b.iter(|| {
            offset = (offset + 37.0) % 9000.0;
            site.on_scroll(offset);
            black_box(site.on_frame())
        })
    });
}

criterion_group!(benches, bench_select_filter, bench_scroll_frame);
criterion_main!(benches);
