//! Retry policy with randomized exponential backoff
//!
//! Every outbound generation call is governed by the same policy: a fixed
//! attempt ceiling and a jittered, exponentially widening delay between
//! attempts, clamped to a configured range.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for retry behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first)
    pub max_attempts: u32,
    /// Lower bound for every backoff delay
    pub min_delay: Duration,
    /// Upper bound for every backoff delay (cap for the exponential window)
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts,
            min_delay,
            max_delay,
        }
    }

    /// Sample the delay to wait before retry number `retry` (1-based: the
    /// wait after the first failed attempt is retry 1).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.delay_with_rng(retry, &mut rand::thread_rng())
    }

    /// Sample with an explicit RNG. The window doubles per retry and is
    /// clamped to `max_delay`; the sample is uniform in `[min_delay, window]`.
    pub fn delay_with_rng<R: Rng + ?Sized>(&self, retry: u32, rng: &mut R) -> Duration {
        let min = self.min_delay.as_secs_f64();
        let max = self.max_delay.as_secs_f64().max(min);

        let exponent = retry.min(32);
        let window = (min * 2f64.powi(exponent as i32)).min(max);
        if window <= min {
            return self.min_delay;
        }

        Duration::from_secs_f64(rng.gen_range(min..=window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 6);
        assert_eq!(policy.min_delay, Duration::from_secs(1));
        assert_eq!(policy.max_delay, Duration::from_secs(60));
    }

    #[test]
    fn test_delays_stay_within_bounds() {
        let policy = RetryPolicy::default();
        let mut rng = rand::thread_rng();
        for retry in 1..=10 {
            for _ in 0..200 {
                let delay = policy.delay_with_rng(retry, &mut rng);
                assert!(delay >= policy.min_delay, "retry {}: {:?}", retry, delay);
                assert!(delay <= policy.max_delay, "retry {}: {:?}", retry, delay);
            }
        }
    }

    #[test]
    fn test_window_widens_then_caps() {
        let policy = RetryPolicy::new(
            6,
            Duration::from_secs(1),
            Duration::from_secs(60),
        );
        let mut rng = rand::thread_rng();
        // Late retries must still be capped at max_delay
        for _ in 0..200 {
            let delay = policy.delay_with_rng(30, &mut rng);
            assert!(delay <= Duration::from_secs(60));
        }
    }

    #[test]
    fn test_degenerate_bounds_return_min() {
        let policy = RetryPolicy::new(
            3,
            Duration::from_secs(5),
            Duration::from_secs(5),
        );
        let mut rng = rand::thread_rng();
        assert_eq!(policy.delay_with_rng(1, &mut rng), Duration::from_secs(5));
    }

    #[test]
    fn test_huge_retry_number_does_not_overflow() {
        let policy = RetryPolicy::default();
        let mut rng = rand::thread_rng();
        let delay = policy.delay_with_rng(u32::MAX, &mut rng);
        assert!(delay <= policy.max_delay);
    }
}
