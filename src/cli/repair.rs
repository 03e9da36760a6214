use clap::Parser;

use super::TimingArgs;

/// Arguments for the repair command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Repair every known package that is not complete:\n    winstore-repair repair\n\n\
                   Repair only two packages:\n    winstore-repair repair Calculator Notepad\n\n\
                   Show what would be attempted:\n    winstore-repair repair --dry-run")]
pub struct RepairArgs {
    /// Packages to repair (defaults to all)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Install for all users on this machine
    #[arg(long)]
    pub all_users: bool,

    /// Check packages and report what would be repaired, without installing
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub timing: TimingArgs,
}
