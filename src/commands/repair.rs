//! Repair command implementation

use console::Style;

use crate::catalog;
use crate::cli::{GlobalArgs, RepairArgs};
use crate::commands::helpers::{self, Session};
use crate::error::Result;
use crate::operations::{InstallFlow, RepairOperation, RepairOptions, repair};
use crate::platform::{self, Collaborators};
use crate::poller::{StatePoller, SystemClock};
use crate::progress::ProgressDisplay;
use crate::report::{Report, display};

/// Run repair command
pub fn run(globals: &GlobalArgs, args: RepairArgs) -> Result<i32> {
    let targets = catalog::resolve_targets(&args.packages)?;
    let options = RepairOptions::from(&args);
    let mut overrides = helpers::overrides(globals, args.all_users, Some(&args.timing));
    overrides.no_export |= options.dry_run;
    let settings = helpers::load_settings(globals, &overrides)?;
    let session = Session::start(globals.verbose, &settings)?;

    let backend = platform::system()?;
    // resized once the baseline shows how many packages need work
    let progress = if options.dry_run {
        ProgressDisplay::hidden()
    } else {
        ProgressDisplay::new(targets.len() as u64)
    };
    let poller = StatePoller::new(settings.policy, SystemClock).with_observer(progress.poll_observer());
    let flow = InstallFlow::new(
        Collaborators::from_backend(&backend),
        &poller,
        &settings,
        &progress,
        session.cancel(),
    );

    println!("Checking {} package(s)...", targets.len());
    let report = RepairOperation::new(&flow, &progress, options).execute(&targets);
    progress.finish();

    if options.dry_run {
        print_plan(&report);
    }
    session.finish(&report)
}

fn print_plan(report: &Report) {
    println!();
    for run in &report.runs {
        println!("{}", display::validation_line(&run.descriptor, &run.baseline));
    }
    let pending: Vec<_> = repair::pending(report).collect();
    println!();
    if pending.is_empty() {
        println!("{}", Style::new().green().apply_to("Nothing to repair."));
        return;
    }
    println!("{}", Style::new().bold().apply_to("Would repair:"));
    for run in pending {
        println!("  {} ({})", run.descriptor.display_name, run.descriptor.install_id);
    }
}
