//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: single-package install arguments
//! - repair: batch repair arguments
//! - check: on-disk check arguments
//! - timing: poll timing flags shared by install and repair
//! - completions: completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod install;
pub mod repair;
pub mod timing;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use repair::RepairArgs;
pub use timing::TimingArgs;

/// winstore-repair - reinstall broken inbox Microsoft Store apps
#[derive(Parser, Debug)]
#[command(
    name = "winstore-repair",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Reinstall or repair inbox Microsoft Store apps and confirm they are on disk",
    long_about = "winstore-repair asks the Microsoft Store installer to install or repair the \
                  Snipping Tool, Photos, Calculator and Notepad, waits until each package is \
                  registered, and checks that its executable is present on disk.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  winstore-repair check                     \x1b[90m# Show on-disk state of every package\x1b[0m\n   \
                  winstore-repair repair                    \x1b[90m# Repair every incomplete package\x1b[0m\n   \
                  winstore-repair install Notepad           \x1b[90m# Install or repair one package\x1b[0m\n   \
                  winstore-repair repair --all-users        \x1b[90m# Provision for every user\x1b[0m\n   \
                  winstore-repair list                      \x1b[90m# List known packages\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub globals: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// More output on the console and in the transcript (repeatable)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file
    #[arg(
        long,
        short = 'c',
        global = true,
        value_name = "PATH",
        env = "WINSTORE_REPAIR_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Root folder holding installed store packages
    #[arg(long, global = true, value_name = "PATH")]
    pub install_root: Option<PathBuf>,

    /// Folder for the CSV export and transcript (defaults to the temp directory)
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "WINSTORE_REPAIR_OUTPUT_DIR"
    )]
    pub output_dir: Option<PathBuf>,

    /// Do not write the CSV export
    #[arg(long, global = true)]
    pub no_export: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install or repair one package and wait for it to land
    Install(InstallArgs),

    /// Repair every package that is not complete on disk
    Repair(RepairArgs),

    /// Check packages on disk without installing anything
    Check(CheckArgs),

    /// List known packages
    List,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
