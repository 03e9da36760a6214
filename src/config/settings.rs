//! Effective settings

use std::path::PathBuf;
use std::time::Duration;

use super::FileConfig;
use crate::error::{Result, config::invalid};
use crate::output::output_dir_base;
use crate::poller::PollPolicy;
use crate::poller::disk::DEFAULT_INSTALL_ROOT;

/// Values given on the command line; `None` keeps the file or default value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub interval_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub settle_secs: Option<u64>,
    pub all_users: bool,
    pub install_root: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub no_export: bool,
}

/// Settings a run works with
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub policy: PollPolicy,
    pub settle_delay: Duration,
    pub all_users: bool,
    pub install_root: PathBuf,
    pub output_dir: PathBuf,
    pub export: bool,
}

impl Settings {
    /// Layer command-line overrides over the file configuration and validate
    pub fn resolve(file: FileConfig, overrides: &Overrides) -> Result<Self> {
        let interval_ms = overrides.interval_ms.unwrap_or(file.poll.interval_ms);
        let timeout_secs = overrides.timeout_secs.unwrap_or(file.poll.timeout_secs);
        let backoff = file.poll.backoff;

        if interval_ms == 0 {
            return Err(invalid("poll interval must be greater than zero"));
        }
        if timeout_secs == 0 {
            return Err(invalid("poll timeout must be greater than zero"));
        }
        if !backoff.is_finite() || backoff < 1.0 {
            return Err(invalid(format!("poll backoff must be at least 1.0, got {backoff}")));
        }

        let interval = Duration::from_millis(interval_ms);
        let policy = PollPolicy {
            interval,
            timeout: Duration::from_secs(timeout_secs),
            backoff,
            max_interval: Duration::from_millis(file.poll.max_interval_ms).max(interval),
        };

        Ok(Self {
            policy,
            settle_delay: Duration::from_secs(
                overrides.settle_secs.unwrap_or(file.settle_delay_secs),
            ),
            all_users: overrides.all_users || file.all_users,
            install_root: overrides
                .install_root
                .clone()
                .or(file.install_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_ROOT)),
            output_dir: overrides
                .output_dir
                .clone()
                .or(file.output_dir)
                .unwrap_or_else(output_dir_base),
            export: file.export && !overrides.no_export,
        })
    }
}
