//! Setup shared by the commands

use chrono::Local;
use tracing::{info, warn};

use crate::cli::{GlobalArgs, TimingArgs};
use crate::config::{FileConfig, Overrides, Settings};
use crate::error::Result;
use crate::logging::{self, LogGuard};
use crate::output::{RunArtifacts, export::write_csv};
use crate::poller::CancelToken;
use crate::report::{Report, display};

/// Merge global and per-command flags into config overrides
pub fn overrides(globals: &GlobalArgs, all_users: bool, timing: Option<&TimingArgs>) -> Overrides {
    let timing = timing.cloned().unwrap_or_default();
    Overrides {
        interval_ms: timing.interval,
        timeout_secs: timing.timeout,
        settle_secs: timing.settle,
        all_users,
        install_root: globals.install_root.clone(),
        output_dir: globals.output_dir.clone(),
        no_export: globals.no_export,
    }
}

/// Load the configuration file and apply `overrides`
pub fn load_settings(globals: &GlobalArgs, overrides: &Overrides) -> Result<Settings> {
    let file = FileConfig::load(globals.config.as_deref())?;
    Settings::resolve(file, overrides)
}

/// A run that installs: transcript, Ctrl-C handling and the CSV export
pub struct Session {
    artifacts: RunArtifacts,
    export: bool,
    cancel: CancelToken,
    _log: LogGuard,
}

impl Session {
    /// Start logging into the transcript and hook Ctrl-C
    pub fn start(verbosity: u8, settings: &Settings) -> Result<Self> {
        let artifacts = RunArtifacts::new(&settings.output_dir, Local::now());
        let log = logging::init(verbosity, Some(&artifacts))?;
        info!(
            version = env!("CARGO_PKG_VERSION"),
            transcript = %artifacts.transcript_path().display(),
            install_root = %settings.install_root.display(),
            all_users = settings.all_users,
            "run started"
        );

        let cancel = CancelToken::new();
        if let Err(e) = cancel.cancel_on_ctrl_c() {
            warn!("cannot install Ctrl-C handler: {e}");
        }

        Ok(Self {
            artifacts,
            export: settings.export,
            cancel,
            _log: log,
        })
    }

    pub fn cancel(&self) -> &CancelToken {
        &self.cancel
    }

    /// Print the report, write the export and return the exit code.
    ///
    /// The report is printed before an export failure is returned.
    pub fn finish(&self, report: &Report) -> Result<i32> {
        display::print_report(report);

        if self.export {
            let path = self.artifacts.export_path();
            write_csv(report, &path)?;
            println!("Exported: {}", path.display());
        }
        println!("Transcript: {}", self.artifacts.transcript_path().display());

        info!(outcome = %report.outcome, exit_code = report.exit_code(), "run finished");
        Ok(report.exit_code())
    }
}
