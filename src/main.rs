//! Cutover CLI - zero-downtime release deployment over rsync
//!
//! Usage: cutover <COMMAND>
//!
//! Commands:
//!   deploy    Upload, activate and record a release
//!   list      List the revisions recorded on the server
//!   activate  Point the current link at an existing revision

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let session = Session::open(cli.config.as_deref(), cli.json, cli.verbose)?;

    match cli.command {
        Commands::Deploy {
            revision_data,
            revision_key,
        } => commands::deploy::run(&session, revision_data.as_deref(), revision_key),
        Commands::List => commands::list::run(&session),
        Commands::Activate { revision } => commands::activate::run(&session, &revision),
    }
}
