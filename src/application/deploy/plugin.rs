//! Rsync deploy plugin
//!
//! The [`DeployPlugin`] a deployment host drives. Each operation is an
//! explicit call; the host owns the order and passes state between them.

use std::sync::Arc;

use crate::domain::entities::{Ledger, RevisionData, RevisionRecord};
use crate::domain::ports::{DeployEvent, DeployPlugin, IdentityProvider, WorkingTree};
use crate::domain::services::format_deployer;
use crate::error::{CutoverError, CutoverResult};

use super::DeployCoordinator;

pub struct RsyncDeployPlugin {
    coordinator: DeployCoordinator,
    working_tree: Arc<dyn WorkingTree>,
    identity: Arc<dyn IdentityProvider>,
}

impl RsyncDeployPlugin {
    pub fn new(
        coordinator: DeployCoordinator,
        working_tree: Arc<dyn WorkingTree>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            coordinator,
            working_tree,
            identity,
        }
    }

    pub fn coordinator(&self) -> &DeployCoordinator {
        &self.coordinator
    }

    /// Deployer string recorded for `revision_data`
    pub fn deployer(&self, revision_data: &RevisionData) -> String {
        format_deployer(
            self.coordinator.config().deployer_format(),
            Some(revision_data),
            &self.identity.resolve(),
        )
    }

    /// Re-activate a revision that is already on the server
    pub fn activate(&self, revision: &str) -> CutoverResult<Ledger> {
        let ledger = self.fetch_state()?;
        self.coordinator.activate_existing(revision, &ledger)
    }

    fn debug(&self, message: &str) {
        self.coordinator
            .events()
            .on_event(DeployEvent::debug(message));
    }
}

impl DeployPlugin for RsyncDeployPlugin {
    fn prepare(&self, revision_data: Option<&RevisionData>) -> CutoverResult<()> {
        self.debug("Checking that git working directory is clean...");
        if !self.working_tree.is_clean()? {
            return Err(CutoverError::Precondition(
                "Git working directory is not clean, commit any change before deploying"
                    .to_string(),
            ));
        }

        self.debug("Ensuring that revision data is present...");
        let data = revision_data.ok_or_else(|| {
            CutoverError::Precondition(
                "no revision data: a revision provider must supply revisionKey, timestamp and scm.sha"
                    .to_string(),
            )
        })?;
        if let Some(field) = data.missing_field() {
            return Err(CutoverError::Precondition(format!(
                "revision data is missing `{}`",
                field
            )));
        }
        Ok(())
    }

    fn fetch_initial_state(&self) -> CutoverResult<Ledger> {
        self.coordinator.ledger().fetch()
    }

    fn fetch_state(&self) -> CutoverResult<Ledger> {
        self.coordinator.ledger().fetch()
    }

    fn upload(
        &self,
        revision_data: &RevisionData,
        initial: &Ledger,
    ) -> CutoverResult<RevisionRecord> {
        let deployer = self.deployer(revision_data);
        let record = RevisionRecord::from_revision_data(revision_data, deployer);
        self.coordinator.events().on_event(DeployEvent::UploadStarted {
            revision: record.revision.clone(),
            deployer: record.deployer.clone(),
        });

        self.coordinator.upload(record.clone(), initial)?;
        Ok(record.with_active(true))
    }
}
