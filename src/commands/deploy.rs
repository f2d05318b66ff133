//! Deploy command: prepare, fetch initial state, upload

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use cutover::domain::ports::RevisionProvider;
use cutover::{CutoverError, DeployPlugin, RevisionData};

use super::{current_repository, Session};

pub fn run(
    session: &Session,
    revision_data: Option<&Path>,
    revision_key: Option<String>,
) -> Result<()> {
    let mut repository = current_repository()?;
    if let Some(key) = revision_key {
        repository = repository.with_revision_key(key);
    }

    let data = match revision_data {
        Some(path) => read_revision_data(path)?,
        None => repository.revision_data()?,
    };

    let plugin = session.plugin(repository)?;
    plugin.prepare(Some(&data))?;
    let initial = plugin.fetch_initial_state()?;
    let uploaded = plugin.upload(&data, &initial);
    // Let transfers still in flight after a failure clean up before exiting
    plugin.coordinator().settle();
    let record = uploaded?;

    if session.json {
        let output = serde_json::json!({
            "event": "deployed",
            "revision": record.revision,
            "version": record.version,
            "deployer": record.deployer,
        });
        println!("{}", output);
    } else {
        println!(
            "Deployed {} ({}) to {}:{}",
            record.revision,
            record.version,
            session.config.host(),
            session.config.release_path(&record.revision)
        );
    }
    Ok(())
}

fn read_revision_data(path: &Path) -> Result<RevisionData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading revision data from {}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| {
        anyhow::Error::new(CutoverError::Precondition(format!(
            "invalid revision data in {}: {}",
            path.display(),
            e
        )))
    })
}
