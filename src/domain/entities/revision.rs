//! Revision entities

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry in the remote revisions ledger
///
/// Identity is `revision`. Fields this tool does not know about are carried
/// through `extra` so that republishing the ledger never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionRecord {
    pub revision: String,
    #[serde(default)]
    pub version: String,
    /// Opaque ordering token; numbers written by other tools are kept as text
    #[serde(default, deserialize_with = "opaque_token")]
    pub timestamp: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub deployer: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RevisionRecord {
    /// Create an inactive record
    pub fn new(
        revision: impl Into<String>,
        version: impl Into<String>,
        timestamp: impl Into<String>,
        deployer: impl Into<String>,
    ) -> Self {
        Self {
            revision: revision.into(),
            version: version.into(),
            timestamp: timestamp.into(),
            active: false,
            deployer: deployer.into(),
            extra: Map::new(),
        }
    }

    /// Build the record for a release about to be deployed
    pub fn from_revision_data(data: &RevisionData, deployer: impl Into<String>) -> Self {
        Self::new(
            data.revision_key.clone(),
            data.scm.sha.clone(),
            data.timestamp.clone(),
            deployer,
        )
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

fn opaque_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Source-control identity of the release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmData {
    #[serde(default)]
    pub sha: String,
}

/// Identity of the release being deployed, supplied by a revision provider
///
/// Wire format is camelCase: `{ "revisionKey", "timestamp", "scm": { "sha" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionData {
    #[serde(default)]
    pub revision_key: String,
    #[serde(default, deserialize_with = "opaque_token")]
    pub timestamp: String,
    #[serde(default)]
    pub scm: ScmData,
}

impl RevisionData {
    pub fn new(
        revision_key: impl Into<String>,
        timestamp: impl Into<String>,
        sha: impl Into<String>,
    ) -> Self {
        Self {
            revision_key: revision_key.into(),
            timestamp: timestamp.into(),
            scm: ScmData { sha: sha.into() },
        }
    }

    /// Name of the first field that makes this unusable for a deploy
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.revision_key.trim().is_empty() {
            Some("revisionKey")
        } else if self.timestamp.trim().is_empty() {
            Some("timestamp")
        } else if self.scm.sha.trim().is_empty() {
            Some("scm.sha")
        } else {
            None
        }
    }
}
