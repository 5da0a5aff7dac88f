// Rust guideline compliant 2026-02-06

//! Error types for the hookreg core library.

use thiserror::Error;

/// Result type alias for hookreg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for hookreg operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest has missing or empty required fields, or the wrong shape.
    #[error("Malformed config: {0}")]
    MalformedConfig(String),

    /// Repository entry not found in the registry.
    #[error("Repository not found: {0}")]
    NotFound(String),
}
