//! Error types for snapshot, render, and tooling operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an ldir run.
///
/// Per-directory listing failures are not represented here: they are
/// recovered during the walk and recorded on the directory node instead.
#[derive(Debug, Error)]
pub enum LdirError {
    #[error("Root path does not exist or is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Editor error: {0}")]
    EditorError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for LdirError {
    fn from(err: config::ConfigError) -> Self {
        LdirError::ConfigError(err.to_string())
    }
}
