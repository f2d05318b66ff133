//! Transfer Endpoint
//!
//! One side of a copy: a local path or a `user@host:path` remote spec.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// Source or destination of a single transfer
///
/// A trailing `/` on either kind is significant and preserved: it selects
/// "the contents of this directory" rather than the directory itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Path on the machine running the deploy
    Local(PathBuf),
    /// Path on the remote host
    Remote { user_at_host: String, path: String },
}

impl Endpoint {
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local(path.into())
    }

    pub fn remote(user_at_host: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Remote {
            user_at_host: user_at_host.into(),
            path: path.into(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Render as a single command-line argument
    pub fn to_arg(&self) -> OsString {
        match self {
            Self::Local(path) => path.clone().into_os_string(),
            Self::Remote { user_at_host, path } => format!("{}:{}", user_at_host, path).into(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote { user_at_host, path } => write!(f, "{}:{}", user_at_host, path),
        }
    }
}
