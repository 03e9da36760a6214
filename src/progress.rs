//! Progress bar display for install runs

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::domain::PackageDescriptor;
use crate::poller::PollObserver;

/// Progress display for a run over several packages
pub struct ProgressDisplay {
    /// One step per package; the message shows poll progress
    package_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total package count
    pub fn new(total_packages: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let package_pb = ProgressBar::new(total_packages);
        package_pb.set_style(style);
        if !console::user_attended_stderr() {
            package_pb.set_draw_target(ProgressDrawTarget::hidden());
        }

        Self { package_pb }
    }

    /// A display that never draws
    pub fn hidden() -> Self {
        Self {
            package_pb: ProgressBar::hidden(),
        }
    }

    /// Observer for the poller that ticks this display
    pub fn poll_observer(&self) -> Box<dyn PollObserver> {
        Box::new(PollTicker(self.package_pb.clone()))
    }

    /// Update to show current package being processed
    pub fn update_package(&self, descriptor: &PackageDescriptor, current: usize, total: usize) {
        self.package_pb
            .set_prefix(format!("({current}/{total}) {}", descriptor.display_name));
        self.package_pb.set_message("");
    }

    /// Resize to the packages that will actually be attempted
    pub fn set_total(&self, total_packages: u64) {
        self.package_pb.set_length(total_packages);
    }

    #[cfg(test)]
    pub fn counts(&self) -> (u64, Option<u64>) {
        (self.package_pb.position(), self.package_pb.length())
    }

    /// Show a phase message for the current package
    pub fn set_phase(&self, phase: &str) {
        self.package_pb.set_message(phase.to_string());
        self.package_pb.tick();
    }

    /// Increment package progress
    pub fn inc_package(&self) {
        self.package_pb.inc(1);
    }

    /// Print without tearing the bar
    pub fn println(&self, print: impl FnOnce()) {
        self.package_pb.suspend(print);
    }

    /// Finish and clear
    pub fn finish(&self) {
        self.package_pb.finish_and_clear();
    }
}

struct PollTicker(ProgressBar);

impl PollObserver for PollTicker {
    fn on_poll(&self, poll: u32, elapsed: Duration) {
        self.0
            .set_message(format!("waiting for install (poll {poll}, {}s)", elapsed.as_secs()));
        self.0.tick();
    }
}
