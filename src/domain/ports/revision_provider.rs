//! Revision Provider Port
//!
//! Supplies the identity of the release being deployed: its key, timestamp
//! and source-control hash.

use crate::domain::entities::RevisionData;
use crate::error::CutoverResult;

pub trait RevisionProvider {
    fn revision_data(&self) -> CutoverResult<RevisionData>;
}

impl RevisionProvider for RevisionData {
    fn revision_data(&self) -> CutoverResult<RevisionData> {
        Ok(self.clone())
    }
}
