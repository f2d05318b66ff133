//! Deploy Coordinator
//!
//! Drives one deploy: compute the next ledger state in memory, then run the
//! release upload, the activation swap and the ledger republish at the same
//! time. The three touch disjoint remote paths, so they are not locked
//! against each other.
//!
//! Nothing is rolled back. If one operation fails after another finished,
//! the finished side effects stay on the remote host; in particular a
//! failed swap next to a successful ledger upload leaves the ledger naming
//! a release that the current link does not point at.
//!
//! Operations still running when the first failure is reported keep
//! running. The coordinator holds on to them until [`settle`] is called or
//! the coordinator is dropped, so their scratch files get removed before
//! the process exits.
//!
//! [`settle`]: DeployCoordinator::settle

use std::sync::{Arc, Mutex};

use crate::config::ResolvedConfig;
use crate::domain::entities::{Ledger, RevisionRecord};
use crate::domain::ports::{DeployEvent, DeployEventSink, NoopEventSink, Transfer};
use crate::domain::value_objects::Endpoint;
use crate::error::{CutoverError, CutoverResult};
use crate::infrastructure::{ActivationSwap, RevisionLedger};

use super::join::{join_first_failure, Detached, Operation};

pub struct DeployCoordinator {
    config: Arc<ResolvedConfig>,
    transfer: Arc<dyn Transfer>,
    events: Arc<dyn DeployEventSink>,
    in_flight: Mutex<Detached>,
}

impl DeployCoordinator {
    pub fn new(config: Arc<ResolvedConfig>, transfer: Arc<dyn Transfer>) -> Self {
        Self {
            config,
            transfer,
            events: Arc::new(NoopEventSink),
            in_flight: Mutex::new(Detached::default()),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn events(&self) -> &Arc<dyn DeployEventSink> {
        &self.events
    }

    /// Ledger component sharing this coordinator's config, transfer and events
    pub fn ledger(&self) -> RevisionLedger {
        RevisionLedger::new(self.config.clone(), self.transfer.clone())
            .with_events(self.events.clone())
    }

    /// Activation component sharing this coordinator's config, transfer and events
    pub fn activation(&self) -> ActivationSwap {
        ActivationSwap::new(self.config.clone(), self.transfer.clone())
            .with_events(self.events.clone())
    }

    /// Deploy `record` on top of `initial`
    ///
    /// Returns the ledger that was published. On error the remote host may
    /// hold any subset of the three updates.
    pub fn upload(&self, record: RevisionRecord, initial: &Ledger) -> CutoverResult<Ledger> {
        let revision = record.revision.clone();
        let next = RevisionLedger::compute_next(initial, record);

        let operations = vec![
            self.release_operation(&revision),
            self.activation_operation(&revision),
            self.ledger_operation(next.clone()),
        ];
        self.run(&revision, operations)?;
        Ok(next)
    }

    /// Point the current link back (or forward) at a release already in `ledger`
    ///
    /// The release directory is not re-sent; only the link and the ledger
    /// change, with the same first-failure policy as [`upload`](Self::upload).
    pub fn activate_existing(&self, revision: &str, ledger: &Ledger) -> CutoverResult<Ledger> {
        let next = ledger.activate_existing(revision).ok_or_else(|| {
            CutoverError::Precondition(format!(
                "revision `{}` is not listed in {}",
                revision,
                self.config.revisions_file()
            ))
        })?;

        let operations = vec![
            self.activation_operation(revision),
            self.ledger_operation(next.clone()),
        ];
        self.run(revision, operations)?;
        Ok(next)
    }

    fn release_operation(&self, revision: &str) -> Operation {
        let transfer = self.transfer.clone();
        let events = self.events.clone();
        let source = Endpoint::local(format!("{}/", self.config.source_path()));
        let destination = self
            .config
            .remote(format!("{}/", self.config.release_path(revision)));
        let options = self.config.payload_options();
        let revision = revision.to_string();

        Box::new(move || {
            transfer.transfer(&source, &destination, &options)?;
            events.on_event(DeployEvent::ReleaseTransferred { revision });
            Ok(())
        })
    }

    fn activation_operation(&self, revision: &str) -> Operation {
        let swap = self.activation();
        let revision = revision.to_string();
        Box::new(move || swap.activate(&revision))
    }

    fn ledger_operation(&self, next: Ledger) -> Operation {
        let ledger = self.ledger();
        Box::new(move || ledger.upload(&next))
    }

    /// Wait for operations left running by an earlier failure
    ///
    /// Returns immediately when nothing is in flight.
    pub fn settle(&self) {
        let detached = match self.in_flight.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        if detached.is_empty() {
            return;
        }
        self.events.on_event(DeployEvent::debug(format!(
            "Waiting for {} in-flight operation(s) to finish...",
            detached.len()
        )));
        detached.wait();
    }

    fn run(&self, revision: &str, operations: Vec<Operation>) -> CutoverResult<()> {
        let (result, detached) = join_first_failure(operations);
        if let Ok(mut guard) = self.in_flight.lock() {
            guard.append(detached);
        } else {
            detached.wait();
        }
        self.finish(revision, result)
    }

    fn finish(&self, revision: &str, result: CutoverResult<()>) -> CutoverResult<()> {
        match &result {
            Ok(()) => self.events.on_event(DeployEvent::Completed {
                revision: revision.to_string(),
            }),
            Err(e) => self.events.on_event(DeployEvent::Failed {
                revision: revision.to_string(),
                error: e.to_string(),
            }),
        }
        result
    }
}

impl Drop for DeployCoordinator {
    fn drop(&mut self) {
        self.settle();
    }
}
