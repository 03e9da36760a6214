//! Repair operation module
//!
//! Batch flow: check every target on disk first, then attempt only the ones
//! that are not Complete, one at a time.

use tracing::{info, warn};

use super::flow::InstallFlow;
use crate::cli::RepairArgs;
use crate::domain::PackageDescriptor;
use crate::poller::Clock;
use crate::progress::ProgressDisplay;
use crate::report::{PackageRun, Report, display, summarize};

/// Configuration options for repair
#[derive(Debug, Clone, Copy, Default)]
pub struct RepairOptions {
    /// Report what would be attempted without calling the installer
    pub dry_run: bool,
}

impl From<&RepairArgs> for RepairOptions {
    fn from(args: &RepairArgs) -> Self {
        Self {
            dry_run: args.dry_run,
        }
    }
}

/// High-level batch repair
pub struct RepairOperation<'f, 'a, C: Clock> {
    flow: &'f InstallFlow<'a, C>,
    progress: &'f ProgressDisplay,
    options: RepairOptions,
}

impl<'f, 'a, C: Clock> RepairOperation<'f, 'a, C> {
    pub fn new(
        flow: &'f InstallFlow<'a, C>,
        progress: &'f ProgressDisplay,
        options: RepairOptions,
    ) -> Self {
        Self {
            flow,
            progress,
            options,
        }
    }

    /// Execute the repair over `targets`
    pub fn execute(&self, targets: &[&PackageDescriptor]) -> Report {
        let baselines: Vec<_> = targets
            .iter()
            .map(|descriptor| {
                let baseline = self.flow.validate(descriptor);
                info!(package = %descriptor.key, baseline = %baseline.status(), "baseline check");
                baseline
            })
            .collect();

        let needing = baselines.iter().filter(|b| !b.is_complete()).count();
        info!(targets = targets.len(), needing, dry_run = self.options.dry_run, "baseline done");
        if !self.options.dry_run {
            self.progress.set_total(needing as u64);
        }

        let mut runs = Vec::with_capacity(targets.len());
        let mut position = 0;
        for (descriptor, baseline) in targets.iter().zip(baselines) {
            if baseline.is_complete() || self.options.dry_run {
                runs.push(self.flow.skip(descriptor, baseline));
                continue;
            }
            if self.flow.is_cancelled() {
                warn!(package = %descriptor.key, "skipped after interrupt");
                runs.push(self.flow.skip(descriptor, baseline));
                continue;
            }

            position += 1;
            self.progress.update_package(descriptor, position, needing);
            let run = self.flow.attempt(descriptor, baseline);
            self.progress.inc_package();
            self.progress.println(|| display::print_package_result(&run));
            runs.push(run);
        }

        let report = summarize(runs);
        if self.flow.is_cancelled() {
            report.interrupted()
        } else {
            report
        }
    }
}

/// Packages a dry run would attempt
pub fn pending(report: &Report) -> impl Iterator<Item = &PackageRun> {
    report.runs.iter().filter(|run| !run.baseline.is_complete())
}
