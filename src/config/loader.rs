//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CutoverError, CutoverResult};

use super::types::RawConfig;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cutover.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            ),
            None => write!(f, "unknown key '{}' in {}", self.key, self.file.display()),
        }
    }
}

/// Load a config file, failing on unreadable or malformed TOML
pub fn load(path: &Path) -> CutoverResult<RawConfig> {
    load_with_warnings(path).map(|(config, _)| config)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CutoverResult<(RawConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: RawConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CutoverError::Config(format!("{}: {}", path.display(), e)))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `path` if it exists, otherwise start from defaults; env overrides win
pub fn load_or_default(path: &Path) -> CutoverResult<(RawConfig, Vec<ConfigWarning>)> {
    let (config, warnings) = if path.exists() {
        load_with_warnings(path)?
    } else {
        (RawConfig::default(), Vec::new())
    };
    Ok((with_env_overrides(config)?, warnings))
}

/// Apply environment variable overrides (CUTOVER_* prefix)
pub fn with_env_overrides(config: RawConfig) -> CutoverResult<RawConfig> {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env_overrides<F>(config: RawConfig, lookup: F) -> CutoverResult<RawConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup("CUTOVER_PORT") {
        Some(raw) => Some(raw.trim().parse::<u16>().map_err(|_| {
            CutoverError::Config(format!("CUTOVER_PORT must be a port number, got '{}'", raw))
        })?),
        None => None,
    };

    let overrides = RawConfig {
        username: lookup("CUTOVER_USERNAME"),
        host: lookup("CUTOVER_HOST"),
        releases_path: lookup("CUTOVER_RELEASES_PATH"),
        source_path: lookup("CUTOVER_SOURCE_PATH"),
        port,
        ..RawConfig::default()
    };

    Ok(config.merge(overrides))
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content.lines().enumerate().find_map(|(idx, line)| {
        let trimmed = line.trim_start();
        let is_key = trimmed
            .strip_prefix(key)
            .map(|rest| rest.trim_start().starts_with('='))
            .unwrap_or(false);
        is_key.then_some(idx + 1)
    })
}
