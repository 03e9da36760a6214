//! CSV export of a report
//!
//! One row per package. Column names and the `True`/`False` spelling of
//! booleans are kept stable for spreadsheets and scripts reading the file.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{Result, output::export_failed};
use crate::report::{PackageRun, Report};

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Package")]
    package: &'a str,
    #[serde(rename = "DisplayName")]
    display_name: &'a str,
    #[serde(rename = "InitialStatus")]
    initial_status: String,
    #[serde(rename = "FinalStatus")]
    final_status: String,
    #[serde(rename = "Repaired")]
    repaired: &'static str,
    #[serde(rename = "RepairSuccess")]
    repair_success: &'static str,
}

impl<'a> From<&'a PackageRun> for ExportRow<'a> {
    fn from(run: &'a PackageRun) -> Self {
        Self {
            package: run.descriptor.key.as_str(),
            display_name: run.descriptor.display_name,
            initial_status: run.baseline.status().to_string(),
            final_status: run.final_state.status().to_string(),
            repaired: pascal_bool(run.attempted()),
            repair_success: pascal_bool(run.repair_succeeded()),
        }
    }
}

fn pascal_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Write `report` as CSV to `path`
pub fn write_csv(report: &Report, path: &Path) -> Result<()> {
    let fail = |reason: String| export_failed(path.display().to_string(), reason);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| fail(e.to_string()))?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| fail(e.to_string()))?;
    for run in &report.runs {
        writer
            .serialize(ExportRow::from(run))
            .map_err(|e| fail(e.to_string()))?;
    }
    writer.flush().map_err(|e| fail(e.to_string()))?;

    info!(path = %path.display(), rows = report.runs.len(), "export written");
    Ok(())
}
