//! Per-package install attempt

use std::fmt;

use chrono::{DateTime, Local};

use super::PackageDescriptor;

/// How the installer is asked to handle the package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    FreshInstall,
    Repair,
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMode::FreshInstall => write!(f, "install"),
            InstallMode::Repair => write!(f, "repair"),
        }
    }
}

/// Terminal state of an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Pending,
    Success,
    Timeout,
    Cancelled,
    Error(String),
}

impl AttemptOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AttemptOutcome::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttemptOutcome::Pending => "Pending",
            AttemptOutcome::Success => "Success",
            AttemptOutcome::Timeout => "Timeout",
            AttemptOutcome::Cancelled => "Cancelled",
            AttemptOutcome::Error(_) => "Error",
        }
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Error(detail) => write!(f, "Error: {detail}"),
            other => f.write_str(other.label()),
        }
    }
}

/// One install or repair of one package.
///
/// The mode is fixed at construction. The outcome moves from `Pending` to a
/// terminal value once; later calls to [`InstallAttempt::resolve`] are ignored.
#[derive(Debug, Clone)]
pub struct InstallAttempt {
    descriptor: PackageDescriptor,
    mode: Option<InstallMode>,
    started_at: DateTime<Local>,
    finished_at: Option<DateTime<Local>>,
    outcome: AttemptOutcome,
}

impl InstallAttempt {
    pub fn new(descriptor: PackageDescriptor, mode: InstallMode) -> Self {
        Self {
            descriptor,
            mode: Some(mode),
            started_at: Local::now(),
            finished_at: None,
            outcome: AttemptOutcome::Pending,
        }
    }

    /// An attempt that failed before a mode could be chosen
    pub fn unplanned(descriptor: PackageDescriptor, detail: impl Into<String>) -> Self {
        let mut attempt = Self {
            descriptor,
            mode: None,
            started_at: Local::now(),
            finished_at: None,
            outcome: AttemptOutcome::Pending,
        };
        attempt.resolve(AttemptOutcome::Error(detail.into()));
        attempt
    }

    /// Record the terminal outcome. Returns `false` if one was already set.
    pub fn resolve(&mut self, outcome: AttemptOutcome) -> bool {
        if self.outcome.is_terminal() || !outcome.is_terminal() {
            return false;
        }
        self.outcome = outcome;
        self.finished_at = Some(Local::now());
        true
    }

    pub fn descriptor(&self) -> &PackageDescriptor {
        &self.descriptor
    }

    pub fn mode(&self) -> Option<InstallMode> {
        self.mode
    }

    pub fn outcome(&self) -> &AttemptOutcome {
        &self.outcome
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        self.finished_at
    }

    pub fn is_success(&self) -> bool {
        self.outcome == AttemptOutcome::Success
    }
}
