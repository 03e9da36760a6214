//! State poller
//!
//! The platform installer returns before deployment finishes and the package
//! registries offer no change notification, so completion is observed by
//! polling. This module is organized into:
//! - [`policy`]: interval, timeout and backoff
//! - [`clock`]: the time source, faked in tests
//! - [`cancel`]: Ctrl-C aware cancellation token
//! - [`disk`]: point-in-time classification of the installed package folder

pub mod cancel;
pub mod clock;
pub mod disk;
pub mod policy;


use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::domain::{AttemptOutcome, PackageDescriptor};
use crate::error::Result;
use crate::platform::ProvisionedRegistry;

pub use cancel::CancelToken;
pub use clock::{Clock, SystemClock};
pub use disk::check_on_disk;
pub use policy::PollPolicy;

/// Longest uninterrupted sleep, so cancellation is noticed promptly
const CANCEL_SLICE: Duration = Duration::from_millis(100);

/// How a poll loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Success,
    Timeout,
    Cancelled,
}

impl From<PollOutcome> for AttemptOutcome {
    fn from(outcome: PollOutcome) -> Self {
        match outcome {
            PollOutcome::Success => AttemptOutcome::Success,
            PollOutcome::Timeout => AttemptOutcome::Timeout,
            PollOutcome::Cancelled => AttemptOutcome::Cancelled,
        }
    }
}

/// Outcome plus how much work it took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSummary {
    pub outcome: PollOutcome,
    pub polls: u32,
    pub elapsed: Duration,
}

/// Receives a callback after every probe
pub trait PollObserver {
    fn on_poll(&self, poll: u32, elapsed: Duration);
}

struct Silent;

impl PollObserver for Silent {
    fn on_poll(&self, _poll: u32, _elapsed: Duration) {}
}

/// Blocking poll loop over a [`Clock`]
pub struct StatePoller<C: Clock> {
    policy: PollPolicy,
    clock: C,
    observer: Box<dyn PollObserver>,
}

impl<C: Clock> StatePoller<C> {
    pub fn new(policy: PollPolicy, clock: C) -> Self {
        Self {
            policy,
            clock,
            observer: Box::new(Silent),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn PollObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[cfg(test)]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Wait until the provisioned registry lists `descriptor`
    pub fn await_installed(
        &self,
        descriptor: &PackageDescriptor,
        registry: &dyn ProvisionedRegistry,
        cancel: &CancelToken,
    ) -> Result<PollSummary> {
        self.await_until(cancel, || {
            let matched = registry.find_provisioned(descriptor.provisioned_name)?;
            if let Some(name) = &matched {
                debug!(package = %descriptor.key, provisioned = %name, "provisioned entry observed");
            }
            Ok(matched.is_some())
        })
    }

    /// Wait until the on-disk check under `root` reports `Complete`
    pub fn await_on_disk(
        &self,
        descriptor: &PackageDescriptor,
        root: &Path,
        cancel: &CancelToken,
    ) -> Result<PollSummary> {
        self.await_until(cancel, || Ok(check_on_disk(descriptor, root).is_complete()))
    }

    /// Poll `probe` until it reports `true`, the deadline passes or `cancel` fires.
    ///
    /// After the deadline one final probe runs before giving up, so a package
    /// that lands during the last sleep still counts. Probe errors end the loop.
    /// A timeout too large to represent as an instant never expires.
    pub fn await_until<F>(&self, cancel: &CancelToken, mut probe: F) -> Result<PollSummary>
    where
        F: FnMut() -> Result<bool>,
    {
        let started = self.clock.now();
        let deadline = started.checked_add(self.policy.timeout);
        let expired = |now: Instant| deadline.is_some_and(|deadline| now >= deadline);
        let mut interval = self.policy.interval;
        let mut polls = 0;

        loop {
            if cancel.is_cancelled() {
                return Ok(self.summary(PollOutcome::Cancelled, polls, started));
            }
            polls += 1;
            let found = probe()?;
            self.observer.on_poll(polls, self.elapsed_since(started));
            if found {
                return Ok(self.summary(PollOutcome::Success, polls, started));
            }

            let now = self.clock.now();
            if expired(now) {
                break;
            }
            trace!(poll = polls, interval_ms = interval.as_millis(), "not yet present");
            let remaining = deadline.map_or(interval, |deadline| deadline - now);
            self.pause(interval.min(remaining), cancel);
            if expired(self.clock.now()) {
                break;
            }
            interval = self.policy.next_interval(interval);
        }

        if cancel.is_cancelled() {
            return Ok(self.summary(PollOutcome::Cancelled, polls, started));
        }
        polls += 1;
        let found = probe()?;
        self.observer.on_poll(polls, self.elapsed_since(started));
        let outcome = if found {
            PollOutcome::Success
        } else {
            PollOutcome::Timeout
        };
        Ok(self.summary(outcome, polls, started))
    }

    /// Sleep for `duration`, waking early if `cancel` fires
    pub fn pause(&self, duration: Duration, cancel: &CancelToken) {
        let mut remaining = duration;
        while !remaining.is_zero() && !cancel.is_cancelled() {
            let slice = remaining.min(CANCEL_SLICE);
            self.clock.sleep(slice);
            remaining -= slice;
        }
    }

    fn elapsed_since(&self, started: Instant) -> Duration {
        self.clock.now().saturating_duration_since(started)
    }

    fn summary(&self, outcome: PollOutcome, polls: u32, started: Instant) -> PollSummary {
        let elapsed = self.elapsed_since(started);
        debug!(?outcome, polls, elapsed_ms = elapsed.as_millis(), "poll loop finished");
        PollSummary {
            outcome,
            polls,
            elapsed,
        }
    }
}
