use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    winstore-repair completions bash > ~/.bash_completion.d/winstore-repair\n\n\
                  Generate PowerShell completions:\n    winstore-repair completions powershell >> $PROFILE")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
