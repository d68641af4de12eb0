//! Error handling for the impact engine.
//!
//! The estimation itself never fails: missing or malformed inputs degrade to
//! unavailable values. Errors only arise at the edges, when a program record
//! is loaded from disk or a configuration is rejected.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for the impact engine
#[derive(Debug, thiserror::Error)]
pub enum ImpactError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File access error with the offending path attached
    #[error("IO error at {}: {message}", path.display())]
    FileAccess {
        /// Path that could not be read
        path: PathBuf,
        /// What went wrong
        message: String,
        /// Underlying IO error, if any
        #[source]
        source: Option<io::Error>,
    },

    /// Snapshot is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot contains no program record
    #[error("Program record not found: {0}")]
    RecordNotFound(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ImpactError {
    /// Create a file access error for `path`
    pub fn file_access(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a file access error for `path` carrying the IO error that caused it
    pub fn file_access_with_source(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }
}

/// Result type for impact engine operations
pub type Result<T> = std::result::Result<T, ImpactError>;
