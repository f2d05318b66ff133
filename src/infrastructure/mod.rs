//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `transfer/` - Copy primitives (rsync)
//! - `remote/` - Remote ledger and activation link
//! - `events/` - Event sinks (JSON, console)
//! - `git` - Working-tree check and revision provider
//! - `identity` - Local user identity

pub mod events;
pub mod git;
pub mod identity;
pub mod remote;
pub mod transfer;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use git::GitRepository;
pub use identity::SystemIdentity;
pub use remote::{ActivationSwap, RevisionLedger};
pub use transfer::RsyncTransfer;
