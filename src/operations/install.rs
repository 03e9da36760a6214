//! Install operation module
//!
//! Installs or repairs a single catalog package, whatever its current state.

use tracing::info;

use super::flow::InstallFlow;
use crate::domain::PackageDescriptor;
use crate::poller::Clock;
use crate::progress::ProgressDisplay;
use crate::report::{Report, display, summarize};

/// High-level single-package install
pub struct InstallOperation<'f, 'a, C: Clock> {
    flow: &'f InstallFlow<'a, C>,
    progress: &'f ProgressDisplay,
}

impl<'f, 'a, C: Clock> InstallOperation<'f, 'a, C> {
    pub fn new(flow: &'f InstallFlow<'a, C>, progress: &'f ProgressDisplay) -> Self {
        Self { flow, progress }
    }

    /// Execute the install.
    ///
    /// An already Complete package is still submitted; the inventory then
    /// selects repair mode.
    pub fn execute(&self, descriptor: &PackageDescriptor) -> Report {
        self.progress.update_package(descriptor, 1, 1);
        let baseline = self.flow.validate(descriptor);
        info!(package = %descriptor.key, baseline = %baseline.status(), "baseline check");

        if self.flow.is_cancelled() {
            return summarize(vec![self.flow.skip(descriptor, baseline)]).interrupted();
        }

        let run = self.flow.attempt(descriptor, baseline);
        self.progress.inc_package();
        self.progress.println(|| display::print_package_result(&run));

        let report = summarize(vec![run]);
        if self.flow.is_cancelled() {
            report.interrupted()
        } else {
            report
        }
    }
}
