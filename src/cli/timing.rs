use clap::Args;

/// Poll timing flags shared by `install` and `repair`
#[derive(Args, Debug, Clone, Default)]
pub struct TimingArgs {
    /// Give up waiting for a package after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Milliseconds between polls
    #[arg(long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Seconds to wait after an attempt before validating it
    #[arg(long, value_name = "SECS")]
    pub settle: Option<u64>,
}
