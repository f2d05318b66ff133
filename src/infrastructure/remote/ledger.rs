//! Remote revisions ledger

use std::fs;
use std::sync::Arc;

use crate::config::ResolvedConfig;
use crate::domain::entities::{Ledger, RevisionRecord};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, NoopEventSink, Transfer, TransferOptions,
};
use crate::domain::value_objects::Endpoint;
use crate::error::{CutoverError, CutoverResult};

/// Fetches, mutates and republishes the remote list of releases
pub struct RevisionLedger {
    config: Arc<ResolvedConfig>,
    transfer: Arc<dyn Transfer>,
    events: Arc<dyn DeployEventSink>,
}

impl RevisionLedger {
    pub fn new(config: Arc<ResolvedConfig>, transfer: Arc<dyn Transfer>) -> Self {
        Self {
            config,
            transfer,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    fn remote_document(&self) -> Endpoint {
        self.config.remote(self.config.revisions_file())
    }

    /// Download and parse the remote ledger
    ///
    /// A missing remote document means nothing was deployed yet and yields an
    /// empty ledger. Every other transfer failure is returned as-is.
    pub fn fetch(&self) -> CutoverResult<Ledger> {
        self.events
            .on_event(DeployEvent::debug("Grabbing revision list from the server..."));

        let scratch = scratch_file()?;
        let result = self.transfer.transfer(
            &self.remote_document(),
            &Endpoint::local(scratch.to_path_buf()),
            &TransferOptions::metadata(),
        );

        let ledger = match result {
            Ok(()) => {
                let content = fs::read_to_string(&scratch)
                    .map_err(|e| CutoverError::filesystem(scratch.to_path_buf(), e))?;
                Ledger::from_json(&content)?
            }
            Err(e) if e.is_missing_source() => {
                self.events.on_event(DeployEvent::LedgerFetched {
                    revisions: 0,
                    first_deploy: true,
                });
                return Ok(Ledger::new());
            }
            Err(e) => return Err(e.into()),
        };

        self.events.on_event(DeployEvent::LedgerFetched {
            revisions: ledger.len(),
            first_deploy: false,
        });
        Ok(ledger)
    }

    /// Ledger state after deploying `record`
    pub fn compute_next(ledger: &Ledger, record: RevisionRecord) -> Ledger {
        ledger.compute_next(record)
    }

    /// Replace the remote ledger document with `ledger`
    pub fn upload(&self, ledger: &Ledger) -> CutoverResult<()> {
        self.events
            .on_event(DeployEvent::debug("Uploading revisions file..."));

        let scratch = scratch_file()?;
        let json = ledger.to_json()?;
        fs::write(&scratch, json)
            .map_err(|e| CutoverError::filesystem(scratch.to_path_buf(), e))?;

        self.transfer.transfer(
            &Endpoint::local(scratch.to_path_buf()),
            &self.remote_document(),
            &TransferOptions::metadata(),
        )?;

        self.events.on_event(DeployEvent::LedgerUploaded {
            revisions: ledger.len(),
        });
        Ok(())
    }
}

/// Fresh local `.json` path, deleted when the returned value drops
fn scratch_file() -> CutoverResult<tempfile::TempPath> {
    tempfile::Builder::new()
        .prefix("cutover-revisions-")
        .suffix(".json")
        .tempfile()
        .map(|file| file.into_temp_path())
        .map_err(|e| CutoverError::filesystem(std::env::temp_dir(), e))
}
