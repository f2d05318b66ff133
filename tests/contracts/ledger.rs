//! Ledger contracts
//!
//! - A missing remote ledger (exit 23) is an empty history, nothing else is
//! - The ledger is always replaced wholesale with the `{ "data": [...] }` envelope

use std::sync::Arc;

use serde_json::json;

use cutover::domain::ports::TransferOptions;
use cutover::{CutoverError, Ledger, RevisionLedger, RevisionRecord};

use crate::common::*;

fn ledger_client(remote: Arc<FakeRemote>) -> RevisionLedger {
    RevisionLedger::new(config("dist"), remote)
}

#[test]
fn contract_missing_ledger_reads_as_empty() {
    let remote = Arc::new(FakeRemote::new());
    let ledger = ledger_client(remote.clone()).fetch().unwrap();

    assert!(ledger.is_empty());
    let call = remote.calls_of(Kind::Download).remove(0);
    assert_eq!(call.remote, "/srv/app/releases/revisions.json");
    assert_eq!(call.options, TransferOptions::metadata());
}

#[test]
fn contract_other_exit_codes_propagate() {
    for code in [1, 12, 255] {
        let remote = Arc::new(FakeRemote::new().fail(Kind::Download, code));
        let err = ledger_client(remote).fetch().unwrap_err();
        match err {
            CutoverError::Transfer(e) => assert_eq!(e.code(), Some(code)),
            other => panic!("code {} should propagate, got {:?}", code, other),
        }
    }
}

#[test]
fn contract_malformed_ledger_is_an_error() {
    let remote = Arc::new(
        FakeRemote::new().with_file("/srv/app/releases/revisions.json", "{\"revisions\": []}"),
    );
    let err = ledger_client(remote).fetch().unwrap_err();
    assert!(matches!(err, CutoverError::Ledger(_)));
}

#[test]
fn contract_upload_writes_envelope() {
    let remote = Arc::new(FakeRemote::new());
    let ledger = Ledger::from(vec![
        RevisionRecord::new("a", "sha-a", "t1", "bob"),
        RevisionRecord::new("b", "sha-b", "t2", "bob").with_active(true),
    ]);

    ledger_client(remote.clone()).upload(&ledger).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&remote.file("/srv/app/releases/revisions.json").unwrap()).unwrap();
    assert_eq!(
        raw,
        json!({"data": [
            {"revision": "a", "version": "sha-a", "timestamp": "t1", "active": false, "deployer": "bob"},
            {"revision": "b", "version": "sha-b", "timestamp": "t2", "active": true, "deployer": "bob"}
        ]})
    );
}

#[test]
fn contract_upload_then_fetch_returns_same_ledger() {
    let remote = Arc::new(FakeRemote::new());
    let client = ledger_client(remote);
    let ledger = Ledger::new().compute_next(RevisionRecord::new("a", "sha", "t", "bob"));

    client.upload(&ledger).unwrap();
    assert_eq!(client.fetch().unwrap(), ledger);
}
