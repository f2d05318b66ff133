//! Rsync Transfer
//!
//! Runs one `rsync` process per transfer over `ssh -p <port>`.

use std::ffi::OsString;
use std::process::{Command, Stdio};
use std::sync::Arc;

use crate::domain::ports::{
    DeployEvent, DeployEventSink, NoopEventSink, Transfer, TransferError, TransferOptions,
};
use crate::domain::value_objects::Endpoint;

/// Transfer primitive backed by the `rsync` binary
pub struct RsyncTransfer {
    program: OsString,
    port: u16,
    events: Arc<dyn DeployEventSink>,
}

impl RsyncTransfer {
    pub fn new(port: u16) -> Self {
        Self {
            program: OsString::from("rsync"),
            port,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Use a different executable (e.g. a wrapper script)
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Check if rsync is installed and available
    pub fn check_available() -> bool {
        Command::new("rsync")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Arguments for one transfer, in order
    pub fn args(
        &self,
        source: &Endpoint,
        destination: &Endpoint,
        options: &TransferOptions,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-e".into(),
            format!("ssh -p {}", self.port).into(),
            options.flags.to_arg().into(),
        ];

        // Include before exclude, never the other way round: rsync applies the
        // first matching rule, so `--exclude=*` listed first would drop every
        // file the include pattern is meant to keep.
        if let Some((include, exclude)) = options.filters() {
            if let Some(include) = include {
                args.push(format!("--include={}", include).into());
            }
            args.push(format!("--exclude={}", exclude).into());
        }

        args.push(source.to_arg());
        args.push(destination.to_arg());
        args
    }

    /// Human-readable command line, for logs
    pub fn render(
        &self,
        source: &Endpoint,
        destination: &Endpoint,
        options: &TransferOptions,
    ) -> String {
        let mut line = self.program.to_string_lossy().into_owned();
        for arg in self.args(source, destination, options) {
            line.push(' ');
            line.push_str(&shell_quote(&arg.to_string_lossy()));
        }
        line
    }
}

impl Transfer for RsyncTransfer {
    fn transfer(
        &self,
        source: &Endpoint,
        destination: &Endpoint,
        options: &TransferOptions,
    ) -> Result<(), TransferError> {
        self.events.on_event(DeployEvent::TransferStarted {
            command: self.render(source, destination, options),
        });

        let output = Command::new(&self.program)
            .args(self.args(source, destination, options))
            .stdin(Stdio::inherit()) // Allow password input
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| TransferError::new(None, e.to_string()))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            format!("{} -> {}", source, destination)
        } else {
            stderr
        };
        match output.status.code() {
            Some(code) => Err(TransferError::new(Some(code), message)),
            None => Err(TransferError::new(
                None,
                format!("terminated by signal: {}", message),
            )),
        }
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = arg
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_./:@=,+".contains(c));
    if plain && !arg.is_empty() {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
