use clap::Parser;

use super::TimingArgs;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install or repair Notepad for the current user:\n    winstore-repair install Notepad\n\n\
                   Provision the Snipping Tool for every user:\n    winstore-repair install ScreenSketch --all-users\n\n\
                   Wait at most three minutes:\n    winstore-repair install Photos --timeout 180")]
pub struct InstallArgs {
    /// Package key: ScreenSketch, Photos, Calculator or Notepad
    pub package: String,

    /// Install for all users on this machine
    #[arg(long)]
    pub all_users: bool,

    #[command(flatten)]
    pub timing: TimingArgs,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from(["winstore-repair", "install", "Notepad"])
            .unwrap_or_else(|e| panic!("Failed to parse CLI arguments: {e}"));
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.package, "Notepad");
                assert!(!args.all_users);
                assert!(args.timing.timeout.is_none());
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_with_timing() {
        let cli = Cli::try_parse_from([
            "winstore-repair",
            "install",
            "photos",
            "--all-users",
            "--timeout",
            "180",
            "--interval",
            "500",
            "--settle",
            "2",
        ])
        .unwrap_or_else(|e| panic!("Failed to parse CLI arguments: {e}"));
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.package, "photos");
                assert!(args.all_users);
                assert_eq!(args.timing.timeout, Some(180));
                assert_eq!(args.timing.interval, Some(500));
                assert_eq!(args.timing.settle, Some(2));
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_requires_package() {
        assert!(Cli::try_parse_from(["winstore-repair", "install"]).is_err());
    }
}
