//! Resolved configuration
//!
//! Normalizes paths and identifiers once per run. The result is immutable
//! and is shared (usually behind an `Arc`) by the ledger, the activation
//! swap and the coordinator.

use crate::domain::ports::TransferOptions;
use crate::domain::value_objects::{remote_path, Endpoint, TransferFlags};
use crate::error::{CutoverError, CutoverResult};

use super::types::RawConfig;

/// Deployment configuration with defaults applied and paths normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    username: String,
    host: String,
    port: u16,
    releases_path: String,
    source_path: String,
    current_path: String,
    current_base: String,
    revisions_file: String,
    flags: TransferFlags,
    exclude: Option<String>,
    include: Option<String>,
    deployer_format: String,
}

impl RawConfig {
    /// Check required fields and compute every derived value
    pub fn resolve(&self) -> CutoverResult<ResolvedConfig> {
        let required = [
            ("username", &self.username),
            ("releases_path", &self.releases_path),
            ("host", &self.host),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(CutoverError::Config(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )));
        }

        let username = self.username.clone().unwrap_or_default();
        let host = self.host.clone().unwrap_or_default();
        let releases_path = remote_path::trim_trailing_separators(
            self.releases_path.as_deref().unwrap_or_default(),
        )
        .to_string();

        let source_path = remote_path::trim_trailing_separators(
            self.source_path
                .as_deref()
                .unwrap_or(RawConfig::DEFAULT_SOURCE_PATH),
        )
        .to_string();

        let configured_current = self
            .current_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(RawConfig::DEFAULT_CURRENT_PATH);
        let current_base = remote_path::basename(configured_current).to_string();
        if current_base.is_empty() || current_base == "." || current_base == ".." {
            return Err(CutoverError::Config(format!(
                "current_path '{}' does not name a link",
                configured_current
            )));
        }
        let current_path = if remote_path::is_absolute(configured_current) {
            remote_path::relative(&releases_path, configured_current)
        } else {
            configured_current.to_string()
        };

        let ledger_name = self
            .revisions_file
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(RawConfig::DEFAULT_REVISIONS_FILE);
        let revisions_file = format!("{}/{}", releases_path, ledger_name);

        let flags = match self.flags.as_deref() {
            Some(flags) => TransferFlags::parse(flags)
                .map_err(|e| CutoverError::Config(format!("flags: {}", e)))?,
            None => TransferFlags::default(),
        };

        let deployer_format = match self.deployer_format.as_deref() {
            Some(format) if !format.is_empty() => format.to_string(),
            Some(_) => "unknown".to_string(),
            None => RawConfig::DEFAULT_DEPLOYER_FORMAT.to_string(),
        };

        Ok(ResolvedConfig {
            username,
            host,
            port: self.port.unwrap_or(RawConfig::DEFAULT_PORT),
            releases_path,
            source_path,
            current_path,
            current_base,
            revisions_file,
            flags,
            exclude: self.exclude.clone().filter(|p| !p.is_empty()),
            include: self.include.clone().filter(|p| !p.is_empty()),
            deployer_format,
        })
    }
}

impl ResolvedConfig {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `username@host`, the remote half of every endpoint
    pub fn user_at_host(&self) -> String {
        format!("{}@{}", self.username, self.host)
    }

    pub fn releases_path(&self) -> &str {
        &self.releases_path
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Link location relative to the releases directory (absolute only if
    /// it could not be made relative)
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// File name of the current link
    pub fn current_base(&self) -> &str {
        &self.current_base
    }

    /// Full remote path of the ledger document
    pub fn revisions_file(&self) -> &str {
        &self.revisions_file
    }

    pub fn deployer_format(&self) -> &str {
        &self.deployer_format
    }

    /// Full remote path of the current link
    pub fn current_link(&self) -> String {
        remote_path::join(&self.releases_path, &self.current_path)
    }

    /// Remote directory that contains the current link
    pub fn current_parent(&self) -> String {
        remote_path::dirname(&self.current_link())
    }

    /// Remote directory of a release
    pub fn release_path(&self, revision_key: &str) -> String {
        format!("{}/{}", self.releases_path, revision_key)
    }

    /// Endpoint for a path on the remote host
    pub fn remote(&self, path: impl Into<String>) -> Endpoint {
        Endpoint::remote(self.user_at_host(), path)
    }

    /// Options for the release payload transfer
    pub fn payload_options(&self) -> TransferOptions {
        TransferOptions::new(
            self.flags.clone(),
            self.exclude.clone(),
            self.include.clone(),
        )
    }
}
