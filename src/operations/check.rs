//! Check operation module
//!
//! On-disk validation only; nothing is installed.

use std::path::Path;

use serde::Serialize;

use crate::domain::{PackageDescriptor, ValidationResult};
use crate::poller::check_on_disk;
use crate::report::{PackageRun, Report, summarize};

/// Validate every target under `install_root`
pub fn execute(targets: &[&PackageDescriptor], install_root: &Path) -> Report {
    let runs = targets
        .iter()
        .map(|descriptor| {
            let state = check_on_disk(descriptor, install_root);
            PackageRun {
                descriptor: (*descriptor).clone(),
                baseline: state.clone(),
                attempt: None,
                final_state: state,
            }
        })
        .collect();
    summarize(runs)
}

/// One `check --json` record
#[derive(Debug, Serialize)]
pub struct CheckEntry<'a> {
    pub package: String,
    pub display_name: &'a str,
    #[serde(flatten)]
    pub result: &'a ValidationResult,
}

pub fn entries(report: &Report) -> Vec<CheckEntry<'_>> {
    report
        .runs
        .iter()
        .map(|run| CheckEntry {
            package: run.descriptor.key.to_string(),
            display_name: run.descriptor.display_name,
            result: &run.final_state,
        })
        .collect()
}
