//! Single-package install flow shared by `install` and `repair`

use tracing::{info, warn};

use crate::config::Settings;
use crate::domain::{AttemptOutcome, InstallAttempt, PackageDescriptor, ValidationResult};
use crate::installer::Invoker;
use crate::platform::Collaborators;
use crate::poller::{CancelToken, Clock, StatePoller, check_on_disk};
use crate::progress::ProgressDisplay;
use crate::report::PackageRun;

/// Drives one package from baseline to final on-disk state
pub struct InstallFlow<'a, C: Clock> {
    collaborators: Collaborators<'a>,
    poller: &'a StatePoller<C>,
    settings: &'a Settings,
    progress: &'a ProgressDisplay,
    cancel: &'a CancelToken,
}

impl<'a, C: Clock> InstallFlow<'a, C> {
    pub fn new(
        collaborators: Collaborators<'a>,
        poller: &'a StatePoller<C>,
        settings: &'a Settings,
        progress: &'a ProgressDisplay,
        cancel: &'a CancelToken,
    ) -> Self {
        Self {
            collaborators,
            poller,
            settings,
            progress,
            cancel,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// On-disk state right now
    pub fn validate(&self, descriptor: &PackageDescriptor) -> ValidationResult {
        check_on_disk(descriptor, &self.settings.install_root)
    }

    /// Run without an attempt: the final state is the baseline
    pub fn skip(&self, descriptor: &PackageDescriptor, baseline: ValidationResult) -> PackageRun {
        PackageRun {
            descriptor: descriptor.clone(),
            final_state: baseline.clone(),
            baseline,
            attempt: None,
        }
    }

    /// Plan, submit, wait, settle and re-validate one package.
    ///
    /// Collaborator and installer failures are recorded on the attempt rather
    /// than returned, so a batch can carry on with the next package.
    pub fn attempt(&self, descriptor: &PackageDescriptor, baseline: ValidationResult) -> PackageRun {
        let invoker = Invoker::new(
            self.collaborators.inventory,
            self.collaborators.installer,
            self.settings.all_users,
        );

        self.progress.set_phase("checking inventory");
        let mut attempt = match invoker.plan(descriptor) {
            Ok(attempt) => attempt,
            Err(e) => {
                warn!(package = %descriptor.key, "cannot plan install: {e}");
                let attempt = InstallAttempt::unplanned(descriptor.clone(), e.to_string());
                return self.finish(descriptor, baseline, attempt);
            }
        };

        self.progress.set_phase("submitting request");
        if let Err(e) = invoker.submit(&attempt) {
            attempt.resolve(AttemptOutcome::Error(e.to_string()));
            return self.finish(descriptor, baseline, attempt);
        }

        let waited = if self.settings.all_users {
            self.poller
                .await_installed(descriptor, self.collaborators.registry, self.cancel)
        } else {
            self.poller
                .await_on_disk(descriptor, &self.settings.install_root, self.cancel)
        };
        let outcome = match waited {
            Ok(summary) => {
                info!(
                    package = %descriptor.key,
                    outcome = ?summary.outcome,
                    polls = summary.polls,
                    elapsed_s = summary.elapsed.as_secs(),
                    "wait finished"
                );
                summary.outcome.into()
            }
            Err(e) => {
                warn!(package = %descriptor.key, "polling failed: {e}");
                AttemptOutcome::Error(e.to_string())
            }
        };
        attempt.resolve(outcome);

        if !self.cancel.is_cancelled() && !self.settings.settle_delay.is_zero() {
            self.progress.set_phase("settling");
            self.poller.pause(self.settings.settle_delay, self.cancel);
        }

        self.finish(descriptor, baseline, attempt)
    }

    fn finish(
        &self,
        descriptor: &PackageDescriptor,
        baseline: ValidationResult,
        attempt: InstallAttempt,
    ) -> PackageRun {
        self.progress.set_phase("validating");
        let final_state = self.validate(descriptor);
        let took = attempt
            .finished_at()
            .map(|finished| (finished - attempt.started_at()).num_seconds())
            .unwrap_or_default();
        info!(
            package = %descriptor.key,
            mode = %attempt.mode().map_or_else(|| "-".to_string(), |m| m.to_string()),
            outcome = %attempt.outcome(),
            initial = %baseline.status(),
            final_status = %final_state.status(),
            elapsed_s = took,
            "package finished"
        );
        PackageRun {
            descriptor: descriptor.clone(),
            baseline,
            attempt: Some(attempt),
            final_state,
        }
    }
}
