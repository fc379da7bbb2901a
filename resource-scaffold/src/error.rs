//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

use crate::path_guard::PathLabel;

/// Scaffolder error type
///
/// Every variant is fatal for the invocation that raised it: the command
/// reports the message and exits with a failure status.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Unrecognized `--pages` or `--stack` value
    #[error("{0}")]
    InvalidOption(String),

    /// Illegal or traversal-bearing folder segment
    #[error("{0}")]
    InvalidPath(String),

    /// A computed output path resolves outside its base directory
    #[error("{label} resolves outside the allowed base path.")]
    PathEscapesBase {
        /// Which logical path failed the check
        label: PathLabel,
    },

    /// No candidate file exists for a stub at render time
    #[error("Stub not found: {}", path.as_ref().map_or_else(|| name.clone(), |p| p.display().to_string()))]
    StubNotFound {
        /// Logical stub name (e.g. `model.stub`)
        name: String,
        /// Path that was expected to hold the stub, if one was resolved
        path: Option<PathBuf>,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error while reading a stub or loading configuration
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        /// The path being accessed
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ScaffoldError>;
