//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod deploy_plugin;
pub mod identity;
pub mod revision_provider;
pub mod transfer;
pub mod working_tree;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use deploy_plugin::DeployPlugin;
pub use identity::{Identity, IdentityProvider};
pub use revision_provider::RevisionProvider;
pub use transfer::{Transfer, TransferError, TransferOptions, MISSING_SOURCE_EXIT_CODE};
pub use working_tree::WorkingTree;
