//! Domain Entities
//!
//! - `RevisionRecord`: one release listed in the remote ledger
//! - `RevisionData`: identity of the release being deployed, from upstream
//! - `Ledger`: the ordered list of records and its mutation rules

mod ledger;
mod revision;

pub use ledger::Ledger;
pub use revision::{RevisionData, RevisionRecord, ScmData};
