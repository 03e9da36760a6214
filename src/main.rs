//! winstore-repair - reinstall broken inbox Microsoft Store apps
//!
//! Asks the Microsoft Store installer to install or repair a small catalog of
//! inbox apps, waits for each package to be registered, and confirms on disk
//! that its executable is present. Every run ends with a report, a CSV export
//! and an exit code describing how far the repair got.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod installer;
mod logging;
mod operations;
mod output;
mod platform;
mod poller;
mod progress;
mod report;

use cli::{Cli, Commands};
use error::Result;

/// Exit code for errors that stop the run before a report exists
const EXIT_FATAL: i32 = 3;

fn run(cli: Cli) -> Result<i32> {
    let globals = cli.globals;
    match cli.command {
        Commands::Install(args) => commands::install::run(&globals, args),
        Commands::Repair(args) => commands::repair::run(&globals, args),
        Commands::Check(args) => commands::check::run(&globals, args),
        Commands::List => commands::list::run().map(|()| 0),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            if let Some(help) = miette::Diagnostic::help(&e) {
                eprintln!("  help: {help}");
            }
            std::process::exit(EXIT_FATAL);
        }
    }
}
