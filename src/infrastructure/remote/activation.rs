//! Activation swap
//!
//! Repoints the remote `current` link without running anything remotely: a
//! link with the same name is built in a private local directory and copied
//! over the old one. This is atomic only as far as the remote filesystem
//! replaces a single directory entry atomically.

use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::config::ResolvedConfig;
use crate::domain::ports::{
    DeployEvent, DeployEventSink, NoopEventSink, Transfer, TransferOptions,
};
use crate::domain::value_objects::{remote_path, Endpoint};
use crate::error::{CutoverError, CutoverResult};

pub struct ActivationSwap {
    config: Arc<ResolvedConfig>,
    transfer: Arc<dyn Transfer>,
    events: Arc<dyn DeployEventSink>,
}

impl ActivationSwap {
    pub fn new(config: Arc<ResolvedConfig>, transfer: Arc<dyn Transfer>) -> Self {
        Self {
            config,
            transfer,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Link target for `revision_key`, relative to the link's own directory
    pub fn link_target(&self, revision_key: &str) -> String {
        remote_path::relative(
            &self.config.current_parent(),
            &self.config.release_path(revision_key),
        )
    }

    /// Point the remote current link at the release directory of `revision_key`
    pub fn activate(&self, revision_key: &str) -> CutoverResult<()> {
        self.events.on_event(DeployEvent::ActivationStarted {
            revision: revision_key.to_string(),
        });

        let target = self.link_target(revision_key);
        let staging = tempfile::Builder::new()
            .prefix("cutover-link-")
            .tempdir()
            .map_err(|e| CutoverError::filesystem(std::env::temp_dir(), e))?;
        let entry = staging.path().join(self.config.current_base());
        create_dir_symlink(Path::new(&target), &entry)
            .map_err(|e| CutoverError::filesystem(entry.clone(), e))?;

        self.events.on_event(DeployEvent::debug(format!(
            "Linking {} -> {}",
            self.config.current_link(),
            target
        )));

        let parent = format!(
            "{}/",
            remote_path::trim_trailing_separators(&self.config.current_parent())
        );
        self.transfer.transfer(
            &Endpoint::local(entry),
            &self.config.remote(parent),
            &TransferOptions::link(),
        )?;

        self.events.on_event(DeployEvent::Activated {
            revision: revision_key.to_string(),
        });
        Ok(())
    }
}

#[cfg(unix)]
fn create_dir_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_dir_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
