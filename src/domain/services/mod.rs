//! Domain Services
//!
//! Stateless domain logic that does not belong to a single entity.

mod deployer;

pub use deployer::format_deployer;
