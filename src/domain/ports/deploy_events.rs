//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Diagnostic message, shown only in verbose mode
    Debug { message: String },

    /// A copy command is about to run
    TransferStarted { command: String },

    /// Remote ledger was read
    LedgerFetched { revisions: usize, first_deploy: bool },

    /// Release upload started
    UploadStarted { revision: String, deployer: String },

    /// Release payload reached its remote directory
    ReleaseTransferred { revision: String },

    /// Current link is being repointed
    ActivationStarted { revision: String },

    /// Current link now points at the release
    Activated { revision: String },

    /// Ledger document republished
    LedgerUploaded { revisions: usize },

    /// All operations succeeded
    Completed { revision: String },

    /// The run failed; remote state may be partially updated
    Failed { revision: String, error: String },
}

impl DeployEvent {
    pub fn debug(message: impl Into<String>) -> Self {
        Self::Debug {
            message: message.into(),
        }
    }

    /// Whether this event is only interesting in verbose mode
    pub fn is_verbose(&self) -> bool {
        matches!(
            self,
            Self::Debug { .. } | Self::TransferStarted { .. } | Self::LedgerFetched { .. }
        )
    }
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
///
/// Events may arrive from several threads at once.
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
