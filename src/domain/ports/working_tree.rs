//! Working Tree Port
//!
//! Checks that the local sources match what was committed, so the deployed
//! release corresponds to a known source-control hash.

use crate::error::CutoverResult;

pub trait WorkingTree: Send + Sync {
    /// `Ok(false)` when there are uncommitted changes
    fn is_clean(&self) -> CutoverResult<bool>;
}
