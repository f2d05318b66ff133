//! List command: show the published ledger

use anyhow::Result;

use cutover::{DeployPlugin, Ledger};

use super::{current_repository, Session};

pub fn run(session: &Session) -> Result<()> {
    let plugin = session.plugin(current_repository()?)?;
    let ledger = plugin.fetch_state()?;

    if session.json {
        println!("{}", ledger.to_json()?);
    } else {
        print!("{}", render(&ledger));
    }
    Ok(())
}

fn render(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No revisions deployed yet.\n".to_string();
    }

    let width = ledger
        .iter()
        .map(|r| r.revision.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for record in ledger.iter() {
        let marker = if record.active { '*' } else { ' ' };
        out.push_str(&format!(
            "{} {:<width$}  {}  {}  {}\n",
            marker,
            record.revision,
            record.timestamp,
            record.version,
            record.deployer,
            width = width
        ));
    }
    out
}
