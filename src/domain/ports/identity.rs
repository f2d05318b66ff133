//! Identity Port
//!
//! Who is running the deploy. Only used to render the deployer string.

/// Locally resolved identity of the deploying user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub account_name: String,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

pub trait IdentityProvider: Send + Sync {
    fn resolve(&self) -> Identity;
}

/// Fixed identity, for tests and non-interactive callers
impl IdentityProvider for Identity {
    fn resolve(&self) -> Identity {
        self.clone()
    }
}
