//! Error taxonomy for the analysis pipeline.
//!
//! Filesystem and parse failures are fatal for the current analysis unless
//! `ignore_errors` is set. Schema violations are data (`ValidationError`
//! values), not errors; structure findings are advisory messages.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// Unreadable directory or file.
    #[error("failed to read {}: {}", path.display(), source)]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file does not exist.
    #[error("configuration not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Malformed configuration content.
    #[error("failed to parse {}: {}", path.display(), message)]
    Parse { path: PathBuf, message: String },
}

impl AuditError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuditError::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AuditError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
