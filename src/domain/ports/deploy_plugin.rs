//! Deploy Plugin Port
//!
//! The operations a deployment host drives, in order, during one run:
//! `prepare`, `fetch_initial_state`, `upload`. `fetch_state` serves
//! listing commands outside a deploy.

use crate::domain::entities::{Ledger, RevisionData, RevisionRecord};
use crate::error::CutoverResult;

pub trait DeployPlugin {
    /// Pre-deploy gate; fails before any remote interaction
    fn prepare(&self, revision_data: Option<&RevisionData>) -> CutoverResult<()>;

    /// Ledger snapshot taken at the start of a deploy
    fn fetch_initial_state(&self) -> CutoverResult<Ledger>;

    /// Ledger as currently published
    fn fetch_state(&self) -> CutoverResult<Ledger>;

    /// Ship the release, activate it, and republish the ledger
    fn upload(
        &self,
        revision_data: &RevisionData,
        initial: &Ledger,
    ) -> CutoverResult<RevisionRecord>;
}
