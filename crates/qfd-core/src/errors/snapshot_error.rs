//! Snapshot loading errors.

use super::validation_error::ValidationError;

/// Errors that can occur while loading and validating a project snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read snapshot {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
