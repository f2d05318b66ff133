//! System identity
//!
//! Resolves the deploying user from the environment and, on Unix, the
//! GECOS field of `/etc/passwd`.

use crate::domain::ports::{Identity, IdentityProvider};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl SystemIdentity {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityProvider for SystemIdentity {
    fn resolve(&self) -> Identity {
        let account_name = ["USER", "LOGNAME", "USERNAME"]
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| "unknown".to_string());

        let display_name = passwd_display_name(&account_name);
        Identity {
            account_name,
            display_name,
        }
    }
}

#[cfg(unix)]
fn passwd_display_name(account: &str) -> Option<String> {
    let passwd = std::fs::read_to_string("/etc/passwd").ok()?;
    display_name_from_passwd(&passwd, account)
}

#[cfg(not(unix))]
fn passwd_display_name(_account: &str) -> Option<String> {
    None
}

/// Full name from the GECOS field (first comma-separated part)
fn display_name_from_passwd(passwd: &str, account: &str) -> Option<String> {
    passwd
        .lines()
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| {
            let mut fields = line.split(':');
            if fields.next()? != account {
                return None;
            }
            let gecos = fields.nth(3)?;
            let name = gecos.split(',').next()?.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
}
