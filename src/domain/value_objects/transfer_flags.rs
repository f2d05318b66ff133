//! Transfer Flags Value Object
//!
//! An ordered set of single-character rsync modes (`rtu`, `t`, `rltI`, ...).

use std::fmt;

/// Error when a flag string cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidFlags {
    /// No flags at all
    Empty,
    /// A character that is not a single-letter mode
    BadCharacter(char),
}

impl fmt::Display for InvalidFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidFlags::Empty => write!(f, "transfer flags must not be empty"),
            InvalidFlags::BadCharacter(c) => {
                write!(f, "invalid transfer flag '{}' (expected ASCII letters)", c)
            }
        }
    }
}

impl std::error::Error for InvalidFlags {}

/// Ordered, duplicate-free set of single-character transfer modes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferFlags(String);

impl TransferFlags {
    /// Recursive, timestamp-preserving, skip-newer sync of release payloads
    pub const DEFAULT_PAYLOAD: &'static str = "rtu";

    /// Parse a flag string, collapsing duplicates while keeping first-seen order
    pub fn parse(flags: &str) -> Result<Self, InvalidFlags> {
        let flags = flags.trim().trim_start_matches('-');
        if flags.is_empty() {
            return Err(InvalidFlags::Empty);
        }

        let mut out = String::with_capacity(flags.len());
        for c in flags.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(InvalidFlags::BadCharacter(c));
            }
            if !out.contains(c) {
                out.push(c);
            }
        }
        Ok(Self(out))
    }

    /// Timestamps only; used for the ledger document
    pub fn metadata() -> Self {
        Self("t".to_string())
    }

    /// Recurse, keep symlinks as links, keep times, always replace (`rltI`)
    pub fn link() -> Self {
        Self("rltI".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, flag: char) -> bool {
        self.0.contains(flag)
    }

    /// Render as a single short-option cluster, e.g. `-rtu`
    pub fn to_arg(&self) -> String {
        format!("-{}", self.0)
    }
}

impl Default for TransferFlags {
    fn default() -> Self {
        Self(Self::DEFAULT_PAYLOAD.to_string())
    }
}

impl fmt::Display for TransferFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
