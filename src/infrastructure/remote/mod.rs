//! Remote Release Layout
//!
//! Components that read and write the remote layout through a
//! [`Transfer`](crate::domain::ports::Transfer):
//!
//! - `RevisionLedger`: the `revisions.json` document
//! - `ActivationSwap`: the `current` link
//!
//! Local scratch files and directories used to stage these transfers are
//! `tempfile` values, removed on drop whichever way the operation exits.

mod activation;
mod ledger;

pub use activation::ActivationSwap;
pub use ledger::RevisionLedger;
