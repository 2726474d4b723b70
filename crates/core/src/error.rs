//! Error types shared across the quicknest crates.

use thiserror::Error;

/// Result type alias for quicknest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during nesting operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid geometry provided.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid sheet provided.
    #[error("invalid sheet: {0}")]
    InvalidSheet(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}
