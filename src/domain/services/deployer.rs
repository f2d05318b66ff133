//! Deployer string formatting
//!
//! Renders the configured deployer template (e.g. `"{userFullName} via CI"`)
//! against the release identity and the local user identity.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::domain::entities::RevisionData;
use crate::domain::ports::Identity;

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(r"(?i)\{([a-z0-9]+)\}").unwrap())
}

/// Replace `{token}` placeholders in `template`
///
/// Known tokens: `revisionKey`, `timestamp`, `sha`, `user`, `userName`,
/// `userFullName`. Lookup is exact-case. Unknown tokens, and
/// `userFullName` when no display name is known, are left as written.
pub fn format_deployer(
    template: &str,
    revision_data: Option<&RevisionData>,
    identity: &Identity,
) -> String {
    let mut values: HashMap<&str, &str> = HashMap::new();
    if let Some(data) = revision_data {
        values.insert("revisionKey", &data.revision_key);
        values.insert("timestamp", &data.timestamp);
        values.insert("sha", &data.scm.sha);
    }
    values.insert("user", &identity.account_name);
    values.insert("userName", &identity.account_name);
    if let Some(display_name) = identity.display_name.as_deref() {
        values.insert("userFullName", display_name);
    }

    token_re()
        .replace_all(template, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => (*value).to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
