//! Configuration types

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Deployment configuration as written by the user
///
/// Every field is optional here so that missing required values can be
/// reported together by [`RawConfig::resolve`](super::ResolvedConfig).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// SSH account on the remote host (required)
    pub username: Option<String>,
    /// Remote host name or address (required)
    pub host: Option<String>,
    /// Remote directory holding one subdirectory per release (required)
    pub releases_path: Option<String>,

    /// SSH port, written either as `22` or `"22"`
    #[serde(default, deserialize_with = "port_number")]
    pub port: Option<u16>,
    /// Local directory with the staged release payload
    pub source_path: Option<String>,
    /// Link selecting the active release, relative to `releases_path`
    pub current_path: Option<String>,
    /// Ledger file name inside `releases_path`
    pub revisions_file: Option<String>,
    /// Transfer modes for the release payload
    pub flags: Option<String>,
    pub exclude: Option<String>,
    pub include: Option<String>,
    /// Template for the deployer string, e.g. `"{userFullName}"`
    pub deployer_format: Option<String>,
}

impl RawConfig {
    pub const DEFAULT_PORT: u16 = 22;
    pub const DEFAULT_SOURCE_PATH: &'static str = "tmp/deploy-dist";
    pub const DEFAULT_CURRENT_PATH: &'static str = "current";
    pub const DEFAULT_REVISIONS_FILE: &'static str = "revisions.json";
    pub const DEFAULT_DEPLOYER_FORMAT: &'static str = "{user}";

    /// Overlay the values set in `other` onto `self`
    pub fn merge(mut self, other: RawConfig) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        take!(
            username,
            host,
            releases_path,
            port,
            source_path,
            current_path,
            revisions_file,
            flags,
            exclude,
            include,
            deployer_format
        );
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(i64),
    Text(String),
}

fn port_number<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<PortValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PortValue::Number(n)) => u16::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("port {} is out of range", n))),
        Some(PortValue::Text(text)) => text
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid port '{}'", text))),
    }
}
