#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
mod pages;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use revanarc_core::{logging, ProjectCatalog, SiteConfig, SiteResult};

/// Configuration and catalog resolved from the command line
#[derive(Debug, Clone)]
pub struct SiteSetup {
    pub config: SiteConfig,
    pub catalog: ProjectCatalog,
}

static SETUP: OnceLock<SiteSetup> = OnceLock::new();

/// Get the startup configuration (set from command line or default)
pub fn get_setup() -> SiteSetup {
    SETUP.get().cloned().unwrap_or_else(|| SiteSetup {
        config: SiteConfig::default(),
        catalog: ProjectCatalog::builtin(),
    })
}

/// Default config location: `<config dir>/revanarc/site.json`
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("revanarc")
        .join("site.json")
}

/// RevanArc - AI security portfolio
#[derive(Parser, Debug)]
#[command(name = "revanarc-site")]
#[command(about = "RevanArc - interactive AI security portfolio")]
struct Args {
    /// Site configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project catalog file (JSON array of projects)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Log filter directive, overrides RUST_LOG
    #[arg(long)]
    log: Option<String>,
}

fn resolve(args: &Args) -> SiteResult<SiteSetup> {
    let config = match &args.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::load_or_default(default_config_path())?,
    };
    let catalog = match &args.catalog {
        Some(path) => ProjectCatalog::load(path)?,
        None => ProjectCatalog::builtin(),
    };
    Ok(SiteSetup { config, catalog })
}

fn main() {
    let args = Args::parse();
    logging::init(args.log.as_deref());

    let setup = match resolve(&args) {
        Ok(setup) => setup,
        Err(e) => {
            tracing::error!("Failed to load site configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        projects = setup.catalog.len(),
        breakpoint = setup.config.mobile_breakpoint,
        "Starting RevanArc"
    );

    // Store setup globally
    let _ = SETUP.set(setup);

    let config = Config::new()
        .with_custom_head(r#"<meta name="theme-color" content="#4da3ff">"#.to_string())
        .with_window(
            WindowBuilder::new()
                .with_title("RevanArc")
                .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
