//! Command handlers for the CLI
//!
//! Every command starts from a [`Session`]: the resolved configuration and
//! the event sink chosen by the global flags.

pub mod activate;
pub mod deploy;
pub mod list;

use std::env;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use cutover::config::{self, ConfigWarning, DEFAULT_CONFIG_FILE};
use cutover::domain::ports::{DeployEvent, DeployEventSink, Transfer};
use cutover::infrastructure::{ConsoleEventSink, GitRepository, JsonEventSink, SystemIdentity};
use cutover::{CutoverError, DeployCoordinator, ResolvedConfig, RsyncDeployPlugin, RsyncTransfer};

pub struct Session {
    pub config: Arc<ResolvedConfig>,
    pub events: Arc<dyn DeployEventSink>,
    pub json: bool,
}

impl Session {
    pub fn open(config_path: Option<&Path>, json: bool, verbose: u8) -> Result<Self> {
        let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let (raw, warnings) = config::load_or_default(path)?;
        print_warnings(&warnings, json);

        let config = raw.resolve()?;
        let events: Arc<dyn DeployEventSink> = if json {
            Arc::new(JsonEventSink::stdout())
        } else {
            Arc::new(ConsoleEventSink::stderr(verbose > 0))
        };
        events.on_event(DeployEvent::debug(format!(
            "Configuration resolved: {}:{} (port {})",
            config.user_at_host(),
            config.releases_path(),
            config.port()
        )));

        Ok(Self {
            config: Arc::new(config),
            events,
            json,
        })
    }

    /// Rsync transfer bound to the configured port, failing early when rsync is absent
    pub fn transfer(&self) -> Result<Arc<dyn Transfer>> {
        if !RsyncTransfer::check_available() {
            return Err(CutoverError::Precondition(
                "rsync not found on PATH; install rsync to deploy".to_string(),
            )
            .into());
        }
        Ok(Arc::new(
            RsyncTransfer::new(self.config.port()).with_events(self.events.clone()),
        ))
    }

    /// Plugin wired to the local git checkout and user identity
    pub fn plugin(&self, repository: GitRepository) -> Result<RsyncDeployPlugin> {
        let coordinator = DeployCoordinator::new(self.config.clone(), self.transfer()?)
            .with_events(self.events.clone());
        Ok(RsyncDeployPlugin::new(
            coordinator,
            Arc::new(repository),
            Arc::new(SystemIdentity::new()),
        ))
    }
}

/// Git checkout for the current working directory
pub fn current_repository() -> Result<GitRepository> {
    Ok(GitRepository::new(env::current_dir()?))
}

fn print_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            let output = serde_json::json!({
                "event": "warning",
                "message": warning.to_string(),
            });
            println!("{}", output);
        } else {
            eprintln!("[WARN] {}", warning);
        }
    }
}
