//! Error types for the RevanArc site core

use thiserror::Error;

/// Main error type for fallible site operations.
///
/// Interactive operations (filtering, stage selection, navigation) never
/// fail; only loading configuration and catalog data can.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Configuration was readable but invalid
    #[error("Invalid config: {0}")]
    Config(String),

    /// Catalog data was readable but invalid
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    /// Two projects in a catalog share an id
    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),

    /// Error during JSON deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
