//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployCoordinator` - Ships a release, swaps the current link and
//!   republishes the ledger, concurrently
//! - `RsyncDeployPlugin` - The host-facing `DeployPlugin` built on top of it

pub mod deploy;

pub use deploy::{DeployCoordinator, RsyncDeployPlugin};
