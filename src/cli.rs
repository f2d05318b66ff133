//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--config, --json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cutover - zero-downtime release deployment over rsync
#[derive(Parser, Debug)]
#[command(name = "cutover")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./cutover.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows rsync command lines)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload the staged release, activate it and record it in the ledger
    Deploy {
        /// Revision data JSON from an upstream provider
        /// ({"revisionKey", "timestamp", "scm": {"sha"}}); defaults to git HEAD
        #[arg(long, conflicts_with = "revision_key")]
        revision_data: Option<PathBuf>,

        /// Release name to use instead of the short commit hash
        #[arg(long)]
        revision_key: Option<String>,
    },

    /// List the revisions recorded on the server
    List,

    /// Point the current link at a revision that is already on the server
    Activate {
        /// Revision key, as shown by `cutover list`
        revision: String,
    },
}
