//! Shared fixtures

use std::fs;
use std::sync::{Arc, Mutex};

use cutover::domain::ports::{DeployEvent, DeployEventSink, Identity, WorkingTree};
use cutover::{CutoverResult, DeployCoordinator, RawConfig, ResolvedConfig, RevisionData};
use cutover::{RsyncDeployPlugin, Transfer};
use tempfile::TempDir;

pub const RELEASES: &str = "/srv/app/releases";

/// Release payload staged on local disk
pub struct StagedRelease {
    pub dir: TempDir,
}

impl StagedRelease {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>hello</h1>").unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/app.js"), "console.log(1)").unwrap();
        Self { dir }
    }

    pub fn source_path(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }
}

pub fn config(source_path: &str) -> Arc<ResolvedConfig> {
    let raw = RawConfig {
        username: Some("deploy".to_string()),
        host: Some("example.com".to_string()),
        releases_path: Some(RELEASES.to_string()),
        source_path: Some(source_path.to_string()),
        ..RawConfig::default()
    };
    Arc::new(raw.resolve().unwrap())
}

pub fn revision(key: &str, sha: &str) -> RevisionData {
    RevisionData::new(key, "2026-03-01T12:00:00.000Z", sha)
}

pub struct CleanTree;

impl WorkingTree for CleanTree {
    fn is_clean(&self) -> CutoverResult<bool> {
        Ok(true)
    }
}

#[derive(Default)]
pub struct EventLog {
    pub events: Mutex<Vec<DeployEvent>>,
}

impl DeployEventSink for EventLog {
    fn on_event(&self, event: DeployEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn plugin(
    config: Arc<ResolvedConfig>,
    transfer: Arc<dyn Transfer>,
    events: Arc<dyn DeployEventSink>,
) -> RsyncDeployPlugin {
    let coordinator = DeployCoordinator::new(config, transfer).with_events(events);
    RsyncDeployPlugin::new(
        coordinator,
        Arc::new(CleanTree),
        Arc::new(Identity::new("alice").with_display_name("Alice Example")),
    )
}

/// Ledger document as stored on the fake host
pub fn ledger_json(records: serde_json::Value) -> String {
    serde_json::json!({ "data": records }).to_string()
}
