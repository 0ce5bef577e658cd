//! Error types for the Assay library.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for Assay operations outside the validation engine.
#[derive(Debug, Error)]
pub enum AssayError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value was rejected by a descriptor.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for Assay operations.
pub type Result<T> = std::result::Result<T, AssayError>;
