//! Transfer Port
//!
//! The only channel to the remote host: one blocking bulk copy per call.
//! There is no remote command execution, so every remote read, write, and
//! link swap is expressed as a transfer.

use thiserror::Error;

use crate::domain::value_objects::{Endpoint, TransferFlags};

/// Exit status the copy tool uses for "some requested source entries do not exist"
///
/// This is rsync's code 23 (partial transfer due to error). Callers that
/// probe for an optional remote file rely on it being reported as-is.
pub const MISSING_SOURCE_EXIT_CODE: i32 = 23;

/// Failure reported by a transfer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The copy process ran and exited non-zero
    #[error("rsync exited with code {code}: {message}")]
    Exited { code: i32, message: String },

    /// The copy process could not be started or was killed by a signal
    #[error("rsync failed: {0}")]
    Failed(String),
}

impl TransferError {
    pub fn new(code: Option<i32>, message: impl Into<String>) -> Self {
        match code {
            Some(code) => Self::Exited {
                code,
                message: message.into(),
            },
            None => Self::Failed(message.into()),
        }
    }

    /// Exit status, when the process ran to completion
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Exited { code, .. } => Some(*code),
            Self::Failed(_) => None,
        }
    }

    /// True for the reserved "requested source is absent" status
    pub fn is_missing_source(&self) -> bool {
        self.code() == Some(MISSING_SOURCE_EXIT_CODE)
    }
}

/// Options for a single transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOptions {
    pub flags: TransferFlags,
    /// Exclude pattern; defaults to `*` when only `include` is set
    pub exclude: Option<String>,
    pub include: Option<String>,
}

impl TransferOptions {
    /// Filtered sync with the given flags
    pub fn new(flags: TransferFlags, exclude: Option<String>, include: Option<String>) -> Self {
        Self {
            flags,
            exclude,
            include,
        }
    }

    /// Narrow copy of a single document, keeping timestamps, no filters
    pub fn metadata() -> Self {
        Self::new(TransferFlags::metadata(), None, None)
    }

    /// Copy of a single link entry that replaces the existing one, no filters
    pub fn link() -> Self {
        Self::new(TransferFlags::link(), None, None)
    }

    /// Effective `(include, exclude)` filter pair
    ///
    /// Filtering is enabled by either pattern; an include without an explicit
    /// exclude excludes everything else.
    pub fn filters(&self) -> Option<(Option<&str>, &str)> {
        if self.exclude.is_none() && self.include.is_none() {
            return None;
        }
        Some((
            self.include.as_deref(),
            self.exclude.as_deref().unwrap_or("*"),
        ))
    }
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self::new(TransferFlags::default(), None, None)
    }
}

/// A bulk copy primitive
///
/// Implementations block until the copy has finished. They are shared
/// across the deploy's concurrent operations, hence `Send + Sync`.
pub trait Transfer: Send + Sync {
    fn transfer(
        &self,
        source: &Endpoint,
        destination: &Endpoint,
        options: &TransferOptions,
    ) -> Result<(), TransferError>;
}
