//! Configuration module for Cutover
//!
//! Configuration hierarchy:
//! 1. Environment variables (CUTOVER_*)
//! 2. Project config (`cutover.toml`)
//! 3. Built-in defaults (lowest priority)
//!
//! The raw, layered [`RawConfig`] is resolved once per run into an immutable
//! [`ResolvedConfig`] that every collaborator receives explicitly.

mod loader;
mod resolve;
mod types;

pub use loader::{
    apply_env_overrides, load, load_or_default, load_with_warnings, with_env_overrides,
    ConfigWarning, DEFAULT_CONFIG_FILE,
};
pub use resolve::ResolvedConfig;
pub use types::RawConfig;
