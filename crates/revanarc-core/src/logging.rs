//! Tracing setup shared by the binary and tests.

use tracing_subscriber::EnvFilter;

/// Directive used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_DIRECTIVE: &str = "revanarc=info,revanarc_core=info";

/// Build the env filter: explicit directive, then `RUST_LOG`, then the
/// default.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

/// Install a global fmt subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .with_target(true)
        .try_init();
}
