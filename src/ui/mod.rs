//! Terminal output helpers for the CLI

use cutover::CutoverError;

/// Follow-up advice for the errors an operator can fix
fn hint(err: &CutoverError) -> Option<&'static str> {
    match err {
        CutoverError::Config(_) => Some(
            "Set username, host and releases_path in cutover.toml or via CUTOVER_* variables.",
        ),
        CutoverError::Precondition(_) => {
            Some("Nothing was changed on the server. Fix the problem above and retry.")
        }
        CutoverError::Transfer(_) => {
            Some("Remote state may be partially updated. Run `cutover list` to inspect it.")
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = err.downcast_ref::<CutoverError>().and_then(hint) {
        out.push_str(&format!("  hint: {}\n", hint));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        println!("{}", output);
        return;
    }

    eprint!("{}", format_error(err));
}
