//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod endpoint;
pub mod remote_path;
mod transfer_flags;

pub use endpoint::Endpoint;
pub use transfer_flags::{InvalidFlags, TransferFlags};
