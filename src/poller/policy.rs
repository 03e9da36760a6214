//! Poll timing

use std::time::Duration;

/// Interval, deadline and backoff for one poll loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub timeout: Duration,
    /// Multiplier applied to the interval after each poll; 1.0 keeps it fixed
    pub backoff: f64,
    pub max_interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            timeout: Duration::from_secs(300),
            backoff: 1.0,
            max_interval: Duration::from_secs(5),
        }
    }
}

impl PollPolicy {
    /// Fixed-interval policy
    #[cfg(test)]
    pub fn fixed(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval,
            timeout,
            backoff: 1.0,
            max_interval: interval,
        }
    }

    /// Interval to wait after one that lasted `current`, never above the cap
    pub fn next_interval(&self, current: Duration) -> Duration {
        if self.backoff <= 1.0 {
            return current;
        }
        let cap = self.max_interval.max(self.interval);
        Duration::try_from_secs_f64(current.as_secs_f64() * self.backoff)
            .map_or(cap, |grown| grown.min(cap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_policy_never_grows() {
        let policy = PollPolicy::fixed(Duration::from_millis(250), Duration::from_secs(30));
        assert_eq!(
            policy.next_interval(Duration::from_millis(250)),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = PollPolicy {
            interval: Duration::from_millis(100),
            timeout: Duration::from_secs(10),
            backoff: 2.0,
            max_interval: Duration::from_millis(300),
        };
        let second = policy.next_interval(policy.interval);
        assert_eq!(second, Duration::from_millis(200));
        assert_eq!(policy.next_interval(second), Duration::from_millis(300));
        assert_eq!(
            policy.next_interval(Duration::from_millis(300)),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn test_oversized_backoff_saturates_at_cap() {
        let policy = PollPolicy {
            interval: Duration::from_millis(100),
            timeout: Duration::from_secs(10),
            backoff: 1.0e300,
            max_interval: Duration::from_secs(5),
        };
        let second = policy.next_interval(policy.interval);
        assert_eq!(second, Duration::from_secs(5));
        assert_eq!(policy.next_interval(second), Duration::from_secs(5));
    }
}
