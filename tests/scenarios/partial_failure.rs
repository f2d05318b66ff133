//! Scenario: A deploy fails part-way through
//!
//! The three remote updates run concurrently and are not transactional.
//! When the link swap fails after the release and the ledger have landed,
//! the host is left inconsistent: the ledger names the new revision as
//! active while `current` still points at the old one.

use std::sync::Arc;

use serde_json::json;

use cutover::domain::ports::DeployEvent;
use cutover::{CutoverError, DeployPlugin, Ledger};

use crate::common::*;

fn remote_at_rev1(remote: FakeRemote) -> Arc<FakeRemote> {
    Arc::new(
        remote
            .with_file(
                "/srv/app/releases/revisions.json",
                ledger_json(json!([
                    {"revision": "rev1", "version": "sha1", "timestamp": "t1", "active": true, "deployer": "bob"}
                ])),
            )
            .with_link("/srv/app/releases/current", "rev1"),
    )
}

#[test]
fn scenario_link_failure_after_other_updates_leaves_ledger_ahead() {
    let staged = StagedRelease::new();
    let remote = remote_at_rev1(
        FakeRemote::new()
            .gate(Kind::LinkPush, vec![Kind::TreePush, Kind::FilePush])
            .fail(Kind::LinkPush, 12),
    );
    let events = Arc::new(EventLog::default());
    let plugin = plugin(config(&staged.source_path()), remote.clone(), events.clone());

    let initial = plugin.fetch_initial_state().unwrap();
    let err = plugin.upload(&revision("rev2", "sha2"), &initial).unwrap_err();

    match &err {
        CutoverError::Transfer(e) => assert_eq!(e.code(), Some(12)),
        other => panic!("expected transfer error, got {:?}", other),
    }

    let ledger =
        Ledger::from_json(&remote.file("/srv/app/releases/revisions.json").unwrap()).unwrap();
    assert_eq!(ledger.active().map(|r| r.revision.as_str()), Some("rev2"));
    assert_eq!(
        remote.link("/srv/app/releases/current").as_deref(),
        Some("rev1")
    );
    assert!(remote.file("/srv/app/releases/rev2/index.html").is_some());

    let events = events.events.lock().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, DeployEvent::Failed { revision, .. } if revision == "rev2")));
}

#[test]
fn scenario_unreadable_ledger_stops_before_any_upload() {
    let staged = StagedRelease::new();
    let remote = remote_at_rev1(FakeRemote::new().fail(Kind::Download, 255));
    let plugin = plugin(
        config(&staged.source_path()),
        remote.clone(),
        Arc::new(EventLog::default()),
    );

    let err = plugin.fetch_initial_state().unwrap_err();
    assert!(!err.is_missing_source());
    assert!(err.to_string().contains("255"), "got: {}", err);
    assert!(remote.calls_of(Kind::TreePush).is_empty());
    assert!(remote.calls_of(Kind::FilePush).is_empty());
}

#[test]
fn scenario_release_failure_is_reported() {
    let staged = StagedRelease::new();
    let remote = remote_at_rev1(FakeRemote::new().fail(Kind::TreePush, 23));
    let plugin = plugin(
        config(&staged.source_path()),
        remote.clone(),
        Arc::new(EventLog::default()),
    );

    let initial = plugin.fetch_initial_state().unwrap();
    let err = plugin.upload(&revision("rev2", "sha2"), &initial).unwrap_err();

    // Exit code 23 is only special when reading the ledger
    assert!(matches!(err, CutoverError::Transfer(_)));
}
