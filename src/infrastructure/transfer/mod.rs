//! Transfer Implementations
//!
//! Concrete [`Transfer`](crate::domain::ports::Transfer) primitives.

mod rsync;

pub use rsync::RsyncTransfer;
