//! Reporter tests over synthetic runs

use std::path::PathBuf;

use super::*;
use crate::catalog;
use crate::domain::{InstallMode, PackageKey};

fn complete() -> ValidationResult {
    ValidationResult::complete(PathBuf::from("app.exe"))
}

fn attempt(key: PackageKey, outcome: AttemptOutcome) -> InstallAttempt {
    let mut attempt = InstallAttempt::new(catalog::descriptor(key).clone(), InstallMode::Repair);
    attempt.resolve(outcome);
    attempt
}

fn untouched(key: PackageKey) -> PackageRun {
    PackageRun {
        descriptor: catalog::descriptor(key).clone(),
        baseline: complete(),
        attempt: None,
        final_state: complete(),
    }
}

fn repaired(key: PackageKey) -> PackageRun {
    PackageRun {
        descriptor: catalog::descriptor(key).clone(),
        baseline: ValidationResult::not_found(),
        attempt: Some(attempt(key, AttemptOutcome::Success)),
        final_state: complete(),
    }
}

fn still_broken(key: PackageKey, outcome: AttemptOutcome) -> PackageRun {
    PackageRun {
        descriptor: catalog::descriptor(key).clone(),
        baseline: ValidationResult::incomplete("no executable"),
        attempt: Some(attempt(key, outcome)),
        final_state: ValidationResult::incomplete("no executable"),
    }
}

#[test]
fn test_all_complete_after_repair_exits_zero() {
    let report = summarize(vec![
        repaired(PackageKey::ScreenSketch),
        untouched(PackageKey::Photos),
        repaired(PackageKey::Calculator),
        untouched(PackageKey::Notepad),
    ]);
    assert_eq!(report.outcome, RunOutcome::AllComplete);
    assert_eq!(report.exit_code(), 0);
    assert!(report.failures.is_empty());
    assert_eq!(report.counts.success, 2);
    assert_eq!(report.counts.skipped, 2);
}

#[test]
fn test_nothing_to_repair_is_distinct_but_exits_zero() {
    let report = summarize(PackageKey::ALL.into_iter().map(untouched).collect());
    assert_eq!(report.outcome, RunOutcome::NothingToRepair);
    assert_ne!(report.outcome, RunOutcome::AllComplete);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_partial_repair_exits_one() {
    let report = summarize(vec![
        repaired(PackageKey::ScreenSketch),
        still_broken(PackageKey::Photos, AttemptOutcome::Timeout),
        untouched(PackageKey::Calculator),
        untouched(PackageKey::Notepad),
    ]);
    assert_eq!(report.outcome, RunOutcome::Partial);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].package, "Photos");
    assert_eq!(report.failures[0].detail, "Timeout");
}

#[test]
fn test_no_improvement_exits_two() {
    let report = summarize(vec![
        still_broken(PackageKey::ScreenSketch, AttemptOutcome::Timeout),
        still_broken(
            PackageKey::Photos,
            AttemptOutcome::Error("0x80073CF9".to_string()),
        ),
        untouched(PackageKey::Calculator),
        untouched(PackageKey::Notepad),
    ]);
    assert_eq!(report.outcome, RunOutcome::NoImprovement);
    assert_eq!(report.exit_code(), 2);
    assert_eq!(report.counts.timeout, 1);
    assert_eq!(report.counts.error, 1);
    assert!(report.failures[1].detail.contains("0x80073CF9"));
}

#[test]
fn test_cancelled_run_is_reported_as_cancelled() {
    let report = summarize(vec![
        repaired(PackageKey::ScreenSketch),
        still_broken(PackageKey::Photos, AttemptOutcome::Cancelled),
    ]);
    assert_eq!(report.outcome, RunOutcome::Cancelled);
    assert_eq!(report.exit_code(), 130);
    assert_eq!(report.counts.cancelled, 1);
}

#[test]
fn test_success_that_is_not_on_disk_is_a_failure() {
    let run = PackageRun {
        descriptor: catalog::descriptor(PackageKey::Notepad).clone(),
        baseline: ValidationResult::not_found(),
        attempt: Some(attempt(PackageKey::Notepad, AttemptOutcome::Success)),
        final_state: ValidationResult::incomplete("1 folder(s) found, none contains Notepad.exe"),
    };
    assert!(!run.repair_succeeded());
    let detail = run.failure_detail().unwrap_or_default();
    assert!(detail.starts_with("Incomplete"));

    let report = summarize(vec![run]);
    assert_eq!(report.outcome, RunOutcome::NoImprovement);
}

#[test]
fn test_repair_flags() {
    let run = repaired(PackageKey::Calculator);
    assert!(run.attempted());
    assert!(run.improved());
    assert!(run.repair_succeeded());

    let run = untouched(PackageKey::Calculator);
    assert!(!run.attempted());
    assert!(!run.improved());
    assert!(!run.repair_succeeded());
}

#[test]
fn test_interrupted_overrides_incomplete_verdicts_only() {
    let partial = summarize(vec![
        repaired(PackageKey::ScreenSketch),
        still_broken(PackageKey::Photos, AttemptOutcome::Timeout),
    ]);
    assert_eq!(partial.interrupted().outcome, RunOutcome::Cancelled);

    let done = summarize(vec![repaired(PackageKey::Notepad)]);
    assert_eq!(done.interrupted().outcome, RunOutcome::AllComplete);
}
