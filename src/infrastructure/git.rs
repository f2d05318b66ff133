//! Git collaborators
//!
//! The working-tree cleanliness check and a revision provider that names
//! the release after the checked-out commit.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::entities::RevisionData;
use crate::domain::ports::{RevisionProvider, WorkingTree};
use crate::error::{CutoverError, CutoverResult};

/// Git checkout rooted at (or containing) `dir`
#[derive(Debug, Clone)]
pub struct GitRepository {
    dir: PathBuf,
    revision_key: Option<String>,
}

impl GitRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            revision_key: None,
        }
    }

    /// Use `key` as the revision key instead of the short commit hash
    pub fn with_revision_key(mut self, key: impl Into<String>) -> Self {
        self.revision_key = Some(key.into());
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn rev_parse(&self, args: &[&str]) -> CutoverResult<String> {
        let output = Command::new("git")
            .arg("rev-parse")
            .args(args)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CutoverError::Precondition(format!("cannot run git: {}", e)))?;

        if !output.status.success() {
            return Err(CutoverError::Precondition(format!(
                "git rev-parse {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl WorkingTree for GitRepository {
    fn is_clean(&self) -> CutoverResult<bool> {
        let status = Command::new("git")
            .args(["diff-index", "--quiet", "HEAD", "--"])
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| CutoverError::Precondition(format!("cannot run git: {}", e)))?;
        Ok(status.success())
    }
}

impl RevisionProvider for GitRepository {
    fn revision_data(&self) -> CutoverResult<RevisionData> {
        let sha = self.rev_parse(&["HEAD"])?;
        let revision_key = match &self.revision_key {
            Some(key) => key.clone(),
            None => self.rev_parse(&["--short", "HEAD"])?,
        };
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        Ok(RevisionData::new(revision_key, timestamp, sha))
    }
}
