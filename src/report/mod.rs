//! Reporter
//!
//! Folds per-package runs into a [`Report`]. The process exit code is derived
//! from the report's [`RunOutcome`], never decided along the way.

pub mod display;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::domain::{AttemptOutcome, InstallAttempt, PackageDescriptor, ValidationResult};

/// Everything observed for one package during a run
#[derive(Debug, Clone)]
pub struct PackageRun {
    pub descriptor: PackageDescriptor,
    /// On-disk state before anything was attempted
    pub baseline: ValidationResult,
    /// `None` when the package needed no attempt
    pub attempt: Option<InstallAttempt>,
    /// On-disk state at the end of the run
    pub final_state: ValidationResult,
}

impl PackageRun {
    /// Baseline wasn't Complete but the final state is
    pub fn improved(&self) -> bool {
        !self.baseline.is_complete() && self.final_state.is_complete()
    }

    pub fn attempted(&self) -> bool {
        self.attempt.is_some()
    }

    /// Attempted, reported success, and ends Complete on disk
    pub fn repair_succeeded(&self) -> bool {
        self.attempt.as_ref().is_some_and(InstallAttempt::is_success)
            && self.final_state.is_complete()
    }

    fn cancelled(&self) -> bool {
        self.attempt
            .as_ref()
            .is_some_and(|a| a.outcome() == &AttemptOutcome::Cancelled)
    }

    /// Why this package needs attention, if it does
    pub fn failure_detail(&self) -> Option<String> {
        if let Some(attempt) = &self.attempt {
            match attempt.outcome() {
                AttemptOutcome::Success | AttemptOutcome::Pending => {}
                other => return Some(other.to_string()),
            }
        }
        if self.final_state.is_complete() {
            return None;
        }
        Some(match self.final_state.detail() {
            Some(detail) => format!("{}: {detail}", self.final_state.status()),
            None => self.final_state.status().to_string(),
        })
    }
}

/// Overall verdict of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every package ends Complete and at least one was attempted
    AllComplete,
    /// Every package was already Complete; nothing was attempted
    NothingToRepair,
    /// Some packages improved, others still need attention
    Partial,
    /// Nothing improved over the baseline
    NoImprovement,
    /// Interrupted before every package was Complete
    Cancelled,
}

impl RunOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::AllComplete | RunOutcome::NothingToRepair => 0,
            RunOutcome::Partial => 1,
            RunOutcome::NoImprovement => 2,
            RunOutcome::Cancelled => 130,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RunOutcome::AllComplete => "all packages complete",
            RunOutcome::NothingToRepair => "nothing to repair",
            RunOutcome::Partial => "partially repaired, some packages need attention",
            RunOutcome::NoImprovement => "no improvement",
            RunOutcome::Cancelled => "cancelled",
        };
        f.write_str(text)
    }
}

/// Attempts per terminal outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub success: usize,
    pub timeout: usize,
    pub cancelled: usize,
    pub error: usize,
    /// Packages with no attempt
    pub skipped: usize,
}

/// A package that did not end up Complete, or whose attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub package: String,
    pub detail: String,
}

/// Summary of a run
#[derive(Debug, Clone)]
pub struct Report {
    pub runs: Vec<PackageRun>,
    pub counts: OutcomeCounts,
    pub failures: Vec<Failure>,
    pub outcome: RunOutcome,
}

impl Report {
    pub fn exit_code(&self) -> i32 {
        self.outcome.exit_code()
    }

    /// Mark a run that stopped early on Ctrl-C.
    ///
    /// A run that already ended with every package Complete keeps its verdict.
    #[must_use]
    pub fn interrupted(mut self) -> Self {
        if !matches!(
            self.outcome,
            RunOutcome::AllComplete | RunOutcome::NothingToRepair
        ) {
            self.outcome = RunOutcome::Cancelled;
        }
        self
    }
}

/// Build the report for a finished run
pub fn summarize(runs: Vec<PackageRun>) -> Report {
    let mut counts = OutcomeCounts::default();
    for run in &runs {
        match run.attempt.as_ref().map(InstallAttempt::outcome) {
            None => counts.skipped += 1,
            Some(AttemptOutcome::Success) => counts.success += 1,
            Some(AttemptOutcome::Timeout) => counts.timeout += 1,
            Some(AttemptOutcome::Cancelled) => counts.cancelled += 1,
            Some(AttemptOutcome::Error(_) | AttemptOutcome::Pending) => counts.error += 1,
        }
    }

    let failures = runs
        .iter()
        .filter_map(|run| {
            run.failure_detail().map(|detail| Failure {
                package: run.descriptor.key.to_string(),
                detail,
            })
        })
        .collect();

    let outcome = classify(&runs);
    Report {
        runs,
        counts,
        failures,
        outcome,
    }
}

fn classify(runs: &[PackageRun]) -> RunOutcome {
    if runs.iter().all(|run| run.final_state.is_complete()) {
        if runs.iter().any(PackageRun::attempted) {
            return RunOutcome::AllComplete;
        }
        return RunOutcome::NothingToRepair;
    }
    if runs.iter().any(PackageRun::cancelled) {
        return RunOutcome::Cancelled;
    }
    if runs.iter().any(PackageRun::improved) {
        return RunOutcome::Partial;
    }
    RunOutcome::NoImprovement
}
