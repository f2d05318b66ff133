//! Error types for Cutover
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::TransferError;

/// Result type alias for Cutover operations
pub type CutoverResult<T> = Result<T, CutoverError>;

/// Main error type for Cutover operations
#[derive(Error, Debug)]
pub enum CutoverError {
    /// Required configuration is missing or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Local state does not allow a deploy to start
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The copy primitive exited unsuccessfully
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// Local scratch file or symlink could not be created
    #[error("filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote ledger document could not be parsed
    #[error("invalid revisions ledger: {0}")]
    Ledger(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CutoverError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying transfer reported the reserved "missing source" status
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Self::Transfer(e) if e.is_missing_source())
    }
}
