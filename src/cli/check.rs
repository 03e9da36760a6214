use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check every known package:\n    winstore-repair check\n\n\
                  Check one package against another root:\n    winstore-repair check Notepad --install-root D:\\WindowsApps\n\n\
                  Machine-readable output:\n    winstore-repair check --json")]
pub struct CheckArgs {
    /// Packages to check (defaults to all)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}
