//! Scenario: Rolling back to an earlier release
//!
//! Steps:
//! 1. Deploy `v1`, then `v2`
//! 2. Activate `v1` again
//!
//! Success Criteria:
//! - `current` points back at `v1` and the ledger marks it active
//! - The release directory is not re-sent

use std::sync::Arc;

use cutover::{CutoverError, DeployPlugin};

use crate::common::*;

#[test]
fn scenario_activate_earlier_release() {
    let staged = StagedRelease::new();
    let remote = Arc::new(FakeRemote::new());
    let plugin = plugin(
        config(&staged.source_path()),
        remote.clone(),
        Arc::new(EventLog::default()),
    );

    for (key, sha) in [("v1", "sha1"), ("v2", "sha2")] {
        let initial = plugin.fetch_initial_state().unwrap();
        plugin.upload(&revision(key, sha), &initial).unwrap();
    }
    let pushes_before = remote.calls_of(Kind::TreePush).len();

    let ledger = plugin.activate("v1").unwrap();

    assert_eq!(ledger.active().map(|r| r.revision.as_str()), Some("v1"));
    assert_eq!(ledger.records()[0].revision, "v1", "order is kept");
    assert_eq!(remote.link("/srv/app/releases/current").as_deref(), Some("v1"));
    assert_eq!(plugin.fetch_state().unwrap(), ledger);
    assert_eq!(remote.calls_of(Kind::TreePush).len(), pushes_before);
}

#[test]
fn scenario_activate_unknown_revision_changes_nothing() {
    let staged = StagedRelease::new();
    let remote = Arc::new(FakeRemote::new());
    let plugin = plugin(
        config(&staged.source_path()),
        remote.clone(),
        Arc::new(EventLog::default()),
    );

    let err = plugin.activate("missing").unwrap_err();
    assert!(matches!(err, CutoverError::Precondition(_)));
    assert!(remote.paths().is_empty());
}
