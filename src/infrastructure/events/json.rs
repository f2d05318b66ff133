//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Debug { message } => serde_json::json!({
                "event": "debug",
                "message": message,
            }),

            DeployEvent::TransferStarted { command } => serde_json::json!({
                "event": "transfer_start",
                "command": command,
            }),

            DeployEvent::LedgerFetched {
                revisions,
                first_deploy,
            } => serde_json::json!({
                "event": "ledger_fetched",
                "revisions": revisions,
                "first_deploy": first_deploy,
            }),

            DeployEvent::UploadStarted { revision, deployer } => serde_json::json!({
                "event": "upload_start",
                "revision": revision,
                "deployer": deployer,
            }),

            DeployEvent::ReleaseTransferred { revision } => serde_json::json!({
                "event": "release_transferred",
                "revision": revision,
            }),

            DeployEvent::ActivationStarted { revision } => serde_json::json!({
                "event": "activation_start",
                "revision": revision,
            }),

            DeployEvent::Activated { revision } => serde_json::json!({
                "event": "activated",
                "revision": revision,
            }),

            DeployEvent::LedgerUploaded { revisions } => serde_json::json!({
                "event": "ledger_uploaded",
                "revisions": revisions,
            }),

            DeployEvent::Completed { revision } => serde_json::json!({
                "event": "complete",
                "status": "success",
                "revision": revision,
            }),

            DeployEvent::Failed { revision, error } => serde_json::json!({
                "event": "complete",
                "status": "failed",
                "revision": revision,
                "error": error,
            }),
        };

        self.write_event(json);
    }
}
