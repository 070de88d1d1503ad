use std::path::PathBuf;

use thiserror::Error;

/// Result type for fixture operations.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors raised while building the fixture. None of them are recovered from.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The remote resource (or its local mirror) could not be fetched.
    #[error("source unavailable: {location}")]
    SourceUnavailable {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Row shape or field content does not match the five expected columns.
    #[error("parse error at line {line}: {reason}")]
    Parse { line: u64, reason: String },

    /// The output file could not be created or written.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A class label has no code in the label mapping.
    #[error("label '{0}' is not in the label mapping")]
    UnmappedLabel(String),

    /// A label mapping failed validation at construction.
    #[error("invalid label mapping: {0}")]
    InvalidMapping(String),
}

impl FixtureError {
    pub(crate) fn unavailable(
        location: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FixtureError::SourceUnavailable {
            location: location.into(),
            source: Box::new(source),
        }
    }
}
