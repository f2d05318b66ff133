//! Scenario: First deploy to an empty host
//!
//! Steps:
//! 1. The host has a releases directory but no ledger and no current link
//! 2. The plugin prepares, fetches the (missing) ledger and uploads
//!
//! Success Criteria:
//! - The release lands under `<releases>/<revisionKey>/`
//! - `current` is a relative link to the release
//! - The ledger lists exactly the new revision, active
//! - No local scratch file survives the run

use std::sync::Arc;
use std::time::Duration;

use cutover::domain::ports::DeployEvent;
use cutover::{DeployPlugin, Ledger};

use crate::common::*;

#[test]
fn scenario_first_deploy_creates_release_link_and_ledger() {
    let staged = StagedRelease::new();
    let remote = Arc::new(FakeRemote::new());
    let events = Arc::new(EventLog::default());
    let plugin = plugin(config(&staged.source_path()), remote.clone(), events.clone());
    let data = revision("abc123", "d34db33f");

    plugin.prepare(Some(&data)).unwrap();
    let initial = plugin.fetch_initial_state().unwrap();
    assert!(initial.is_empty(), "missing ledger reads as empty");

    let record = plugin.upload(&data, &initial).unwrap();
    assert!(record.active);
    assert_eq!(record.revision, "abc123");
    assert_eq!(record.version, "d34db33f");
    assert_eq!(record.deployer, "alice");

    assert_eq!(
        remote.file("/srv/app/releases/abc123/index.html").as_deref(),
        Some("<h1>hello</h1>")
    );
    assert_eq!(
        remote.file("/srv/app/releases/abc123/assets/app.js").as_deref(),
        Some("console.log(1)")
    );
    assert_eq!(
        remote.link("/srv/app/releases/current").as_deref(),
        Some("abc123")
    );

    let ledger = Ledger::from_json(&remote.file("/srv/app/releases/revisions.json").unwrap()).unwrap();
    assert_eq!(ledger.len(), 1);
    let stored = ledger.get("abc123").unwrap();
    assert!(stored.active);
    assert_eq!(stored.timestamp, "2026-03-01T12:00:00.000Z");

    let events = events.events.lock().unwrap();
    assert!(events.contains(&DeployEvent::LedgerFetched {
        revisions: 0,
        first_deploy: true
    }));
    assert!(events.contains(&DeployEvent::Completed {
        revision: "abc123".to_string()
    }));
}

#[test]
fn scenario_scratch_resources_are_removed_after_deploy() {
    let staged = StagedRelease::new();
    let remote = Arc::new(FakeRemote::new());
    let plugin = plugin(
        config(&staged.source_path()),
        remote.clone(),
        Arc::new(EventLog::default()),
    );
    let data = revision("abc123", "d34db33f");

    let initial = plugin.fetch_initial_state().unwrap();
    plugin.upload(&data, &initial).unwrap();

    for call in remote.calls_of(Kind::Download) {
        assert!(!call.local.exists(), "leftover {}", call.local.display());
    }
    for call in remote.calls_of(Kind::FilePush) {
        assert!(!call.local.exists(), "leftover {}", call.local.display());
    }
    let link = remote.calls_of(Kind::LinkPush).remove(0);
    assert!(
        !link.local.parent().unwrap().exists(),
        "link staging directory should be removed"
    );
}

#[test]
fn scenario_scratch_resources_are_removed_after_failure() {
    let staged = StagedRelease::new();
    let remote = Arc::new(FakeRemote::new().fail(Kind::LinkPush, 12));
    let plugin = plugin(
        config(&staged.source_path()),
        remote.clone(),
        Arc::new(EventLog::default()),
    );
    let data = revision("abc123", "d34db33f");

    let initial = plugin.fetch_initial_state().unwrap();
    assert!(plugin.upload(&data, &initial).is_err());

    let link = remote.calls_of(Kind::LinkPush).remove(0);
    assert!(!link.local.parent().unwrap().exists());
}

#[test]
fn scenario_settle_waits_for_operations_left_running() {
    let staged = StagedRelease::new();
    let remote = Arc::new(
        FakeRemote::new()
            .fail(Kind::TreePush, 1)
            .delay(Kind::LinkPush, Duration::from_millis(300))
            .delay(Kind::FilePush, Duration::from_millis(300)),
    );
    let plugin = plugin(
        config(&staged.source_path()),
        remote.clone(),
        Arc::new(EventLog::default()),
    );
    let data = revision("abc123", "d34db33f");

    let initial = plugin.fetch_initial_state().unwrap();
    assert!(plugin.upload(&data, &initial).is_err());

    plugin.coordinator().settle();

    // The other two updates ran to completion and released their scratch space
    assert_eq!(
        remote.link("/srv/app/releases/current").as_deref(),
        Some("abc123")
    );
    assert!(remote.file("/srv/app/releases/revisions.json").is_some());
    let link = remote.calls_of(Kind::LinkPush).remove(0);
    assert!(!link.local.parent().unwrap().exists());
    let ledger = remote.calls_of(Kind::FilePush).remove(0);
    assert!(!ledger.local.exists());
}

#[test]
fn scenario_dropping_the_plugin_waits_for_operations_left_running() {
    let staged = StagedRelease::new();
    let remote = Arc::new(
        FakeRemote::new()
            .fail(Kind::TreePush, 1)
            .delay(Kind::FilePush, Duration::from_millis(300)),
    );
    let plugin = plugin(
        config(&staged.source_path()),
        remote.clone(),
        Arc::new(EventLog::default()),
    );

    let initial = plugin.fetch_initial_state().unwrap();
    assert!(plugin.upload(&revision("abc123", "d34db33f"), &initial).is_err());
    drop(plugin);

    assert!(remote.file("/srv/app/releases/revisions.json").is_some());
    let ledger = remote.calls_of(Kind::FilePush).remove(0);
    assert!(!ledger.local.exists());
}
