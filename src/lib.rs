//! Cutover - zero-downtime release deployment over rsync
//!
//! Cutover ships a staged release to a remote host, repoints the host's
//! `current` link at it, and keeps a JSON ledger of every release on the
//! host. The only channel to the host is a bulk file copy: there is no
//! remote shell, so reads, writes and the link swap are all transfers.
//!
//! Remote layout:
//!
//! ```text
//! <releases_path>/
//!   revisions.json      {"data": [RevisionRecord, ...]}
//!   <revision_key>/     one directory per release
//!   current -> <revision_key>
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DeployCoordinator, RsyncDeployPlugin};
pub use config::{RawConfig, ResolvedConfig};
pub use domain::entities::{Ledger, RevisionData, RevisionRecord};
pub use domain::ports::{DeployPlugin, Transfer, TransferError, TransferOptions};
pub use domain::value_objects::Endpoint;
pub use error::{CutoverError, CutoverResult};
pub use infrastructure::{ActivationSwap, RevisionLedger, RsyncTransfer};
