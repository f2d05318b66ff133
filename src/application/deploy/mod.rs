//! Deploy Module
//!
//! Orchestrates a release deploy.
//!
//! ## Structure
//!
//! - `coordinator` - `DeployCoordinator`: next ledger state, then the three
//!   remote operations joined on first failure
//! - `plugin` - `RsyncDeployPlugin`: pre-deploy gate, ledger fetch, upload
//! - `join` - concurrent dispatch helper
//!
//! ## Usage
//!
//! ```ignore
//! use cutover::application::{DeployCoordinator, RsyncDeployPlugin};
//!
//! let coordinator = DeployCoordinator::new(config, transfer);
//! let plugin = RsyncDeployPlugin::new(coordinator, working_tree, identity);
//! plugin.prepare(Some(&revision_data))?;
//! let initial = plugin.fetch_initial_state()?;
//! plugin.upload(&revision_data, &initial)?;
//! ```

mod coordinator;
mod join;
mod plugin;

pub use coordinator::DeployCoordinator;
pub use plugin::RsyncDeployPlugin;
