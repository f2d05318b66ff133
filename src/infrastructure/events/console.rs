//! Console Event Sink
//!
//! One human-readable line per event on stderr. Verbose-only events are
//! dropped unless verbose output was requested.

use std::io::{self, Write};
use std::sync::Mutex;

use is_terminal::IsTerminal;

use crate::domain::ports::{DeployEvent, DeployEventSink};

pub struct ConsoleEventSink {
    verbose: bool,
    unicode: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Write to stderr, using symbols only when stderr is a terminal
    pub fn stderr(verbose: bool) -> Self {
        Self {
            verbose,
            unicode: io::stderr().is_terminal(),
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Plain-ASCII sink over a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            verbose,
            unicode: false,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn marker(&self, event: &DeployEvent) -> &'static str {
        match (event, self.unicode) {
            (DeployEvent::Completed { .. }, true) => "✓",
            (DeployEvent::Completed { .. }, false) => "[OK]",
            (DeployEvent::Failed { .. }, true) => "✗",
            (DeployEvent::Failed { .. }, false) => "[FAIL]",
            (_, true) if event.is_verbose() => "·",
            (_, false) if event.is_verbose() => "[DEBUG]",
            (_, true) => "→",
            (_, false) => "[INFO]",
        }
    }
}

fn describe(event: &DeployEvent) -> String {
    match event {
        DeployEvent::Debug { message } => message.clone(),
        DeployEvent::TransferStarted { command } => format!("Running rsync command: {}", command),
        DeployEvent::LedgerFetched {
            first_deploy: true, ..
        } => "No revisions file on the server yet, starting a new one".to_string(),
        DeployEvent::LedgerFetched { revisions, .. } => {
            format!("Found {} revision(s) on the server", revisions)
        }
        DeployEvent::UploadStarted { revision, deployer } => {
            format!("Uploading revision `{}` (deployer: {})...", revision, deployer)
        }
        DeployEvent::ReleaseTransferred { revision } => {
            format!("Release `{}` transferred", revision)
        }
        DeployEvent::ActivationStarted { revision } => {
            format!("Activating revision `{}`...", revision)
        }
        DeployEvent::Activated { revision } => format!("Revision `{}` is live", revision),
        DeployEvent::LedgerUploaded { revisions } => {
            format!("Revisions file updated ({} revision(s))", revisions)
        }
        DeployEvent::Completed { revision } => format!("Deployed `{}`", revision),
        DeployEvent::Failed { revision, error } => {
            format!(
                "Deploy of `{}` failed: {} (remote state may be partially updated)",
                revision, error
            )
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if event.is_verbose() && !self.verbose {
            return;
        }
        let line = format!("{} {}", self.marker(&event), describe(&event));
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
