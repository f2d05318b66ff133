//! Activate command: repoint the current link at a deployed revision

use anyhow::Result;

use super::{current_repository, Session};

pub fn run(session: &Session, revision: &str) -> Result<()> {
    let plugin = session.plugin(current_repository()?)?;
    let activated = plugin.activate(revision);
    plugin.coordinator().settle();
    let ledger = activated?;

    if session.json {
        let output = serde_json::json!({
            "event": "activated",
            "revision": revision,
            "revisions": ledger.len(),
        });
        println!("{}", output);
    } else {
        println!(
            "Activated {} at {}:{}",
            revision,
            session.config.host(),
            session.config.current_link()
        );
    }
    Ok(())
}
