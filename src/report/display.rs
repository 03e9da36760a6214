//! Console rendering of runs and reports

use console::Style;

use super::{PackageRun, Report, RunOutcome};
use crate::domain::{PackageDescriptor, ValidationResult, ValidationStatus};

fn status_style(status: ValidationStatus) -> Style {
    match status {
        ValidationStatus::Complete => Style::new().green(),
        ValidationStatus::Incomplete => Style::new().yellow(),
        ValidationStatus::NotFound => Style::new().red(),
        ValidationStatus::Error => Style::new().red().bold(),
    }
}

/// One line describing a validation result
pub fn validation_line(descriptor: &PackageDescriptor, result: &ValidationResult) -> String {
    let status = status_style(result.status()).apply_to(format!("{:<10}", result.status()));
    let extra = match (result.executable_path(), result.detail()) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(detail)) => detail.to_string(),
        (None, None) => String::new(),
    };
    format!(
        "  {:<13} {status} {}",
        descriptor.key,
        Style::new().dim().apply_to(extra)
    )
}

/// Status line printed as each package finishes
pub fn print_package_result(run: &PackageRun) {
    let mode = run
        .attempt
        .as_ref()
        .and_then(|a| a.mode())
        .map_or_else(|| "skipped".to_string(), |m| m.to_string());
    let outcome = run
        .attempt
        .as_ref()
        .map_or_else(|| "-".to_string(), |a| a.outcome().to_string());
    println!(
        "{} {} [{mode}] {} -> {} ({outcome})",
        Style::new().bold().apply_to("•"),
        Style::new().bold().yellow().apply_to(run.descriptor.display_name),
        run.baseline.status(),
        status_style(run.final_state.status()).apply_to(run.final_state.status()),
    );
}

/// Final table plus verdict
pub fn print_report(report: &Report) {
    println!();
    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to(format!(
                "{:<13} {:<20} {:<11} {:<11} {:<9} {}",
                "Package", "Display name", "Initial", "Final", "Repaired", "Success"
            ))
    );
    for run in &report.runs {
        println!(
            "{:<13} {:<20} {:<11} {} {:<9} {}",
            run.descriptor.key,
            run.descriptor.display_name,
            run.baseline.status(),
            status_style(run.final_state.status())
                .apply_to(format!("{:<11}", run.final_state.status())),
            yes_no(run.attempted()),
            yes_no(run.repair_succeeded()),
        );
    }

    if !report.failures.is_empty() {
        println!();
        println!("{}", Style::new().bold().red().apply_to("Needs attention:"));
        for failure in &report.failures {
            println!("  {}: {}", failure.package, failure.detail);
        }
    }

    let counts = &report.counts;
    println!();
    println!(
        "Attempts: {} succeeded, {} timed out, {} failed, {} cancelled, {} skipped",
        counts.success, counts.timeout, counts.error, counts.cancelled, counts.skipped
    );
    let verdict_style = match report.outcome {
        RunOutcome::AllComplete | RunOutcome::NothingToRepair => Style::new().bold().green(),
        RunOutcome::Partial => Style::new().bold().yellow(),
        RunOutcome::NoImprovement | RunOutcome::Cancelled => Style::new().bold().red(),
    };
    println!(
        "{} {}",
        verdict_style.apply_to("Result:"),
        verdict_style.apply_to(report.outcome)
    );
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::domain::PackageKey;
    use std::path::PathBuf;

    #[test]
    fn test_validation_line_shows_path_for_complete() {
        console::set_colors_enabled(false);
        let descriptor = catalog::descriptor(PackageKey::Notepad);
        let line = validation_line(
            descriptor,
            &ValidationResult::complete(PathBuf::from("Notepad.exe")),
        );
        assert!(line.contains("Notepad"));
        assert!(line.contains("Complete"));
        assert!(line.contains("Notepad.exe"));
    }

    #[test]
    fn test_validation_line_shows_detail_for_error() {
        console::set_colors_enabled(false);
        let descriptor = catalog::descriptor(PackageKey::Photos);
        let line = validation_line(descriptor, &ValidationResult::error("access denied"));
        assert!(line.contains("Error"));
        assert!(line.contains("access denied"));
    }
}
