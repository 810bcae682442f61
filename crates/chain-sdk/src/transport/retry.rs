use std::time::Duration;

use rand::Rng;

use crate::error::ClientError;

/// How a failed attempt relates to server-side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryClass {
    /// The request provably never reached the server: connection
    /// establishment failed before any byte was sent.
    NotReceived,
    /// The server answered with this HTTP failure status.
    Status(u16),
    /// A response (or part of one) was seen, or the failure is permanent.
    Permanent,
}

/// Whether a dispatch may be re-issued after the server has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryMode {
    /// Transient failure statuses may be retried in addition to
    /// connection-establishment failures.
    Idempotent,
    /// Only provably-unreceived attempts are retried. Used for batch
    /// submissions, whose side effects may have partially landed on the
    /// server before the failure was observed.
    NotReceivedOnly,
}

/// Classify an error for retry purposes.
pub fn classify(err: &ClientError) -> RetryClass {
    match err {
        ClientError::Network(e) if e.is_connect() => RetryClass::NotReceived,
        ClientError::Api(api) => match api.status {
            Some(status) => RetryClass::Status(status),
            None => RetryClass::Permanent,
        },
        _ => RetryClass::Permanent,
    }
}

/// Bounded exponential backoff with full jitter.
///
/// A policy is a pure mapping from `(attempt, error class, mode)` to an
/// optional delay, so retry behavior is testable without a network. The
/// [`Connection`](super::Connection) holding the policy surfaces the last
/// observed error once attempts are exhausted; it never synthesizes a
/// "retries exhausted" error of its own.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first. `1` disables retries.
    pub max_attempts: u32,
    /// Delay ceiling for the first retry, doubled for each one after.
    pub base_delay: Duration,
    /// Upper bound on the backoff ceiling.
    pub max_delay: Duration,
    /// Failure statuses treated as transient server overload.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(4),
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

impl RetryPolicy {
    /// A policy that surfaces every error on first occurrence.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Decide whether attempt `attempt` (1-based) may be followed by
    /// another, and after what delay. `None` means surface the error as-is.
    pub fn next_delay(&self, attempt: u32, class: RetryClass, mode: RetryMode) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }
        let eligible = match class {
            RetryClass::NotReceived => true,
            RetryClass::Status(status) => {
                mode == RetryMode::Idempotent && self.retryable_statuses.contains(&status)
            }
            RetryClass::Permanent => false,
        };
        if !eligible {
            return None;
        }
        Some(self.backoff_delay(attempt))
    }

    /// Exponential ceiling capped at `max_delay`, drawn uniformly from
    /// `0..=ceiling` so concurrent clients do not synchronize their retries.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let doublings = (attempt - 1).min(16);
        let ceiling = self
            .base_delay
            .saturating_mul(1u32 << doublings)
            .min(self.max_delay);
        let ceiling_ms = ceiling.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(0..=ceiling_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn api_error(status: Option<u16>) -> ClientError {
        ClientError::Api(ApiError {
            code: "CH000".to_owned(),
            message: "test".to_owned(),
            detail: None,
            status,
        })
    }

    #[test]
    fn classify_status_errors_by_status() {
        assert_eq!(classify(&api_error(Some(503))), RetryClass::Status(503));
        assert_eq!(classify(&api_error(Some(400))), RetryClass::Status(400));
    }

    #[test]
    fn classify_batch_item_errors_as_permanent() {
        // A per-item descriptor has no enclosing status; it must never feed
        // the retry loop.
        assert_eq!(classify(&api_error(None)), RetryClass::Permanent);
    }

    #[test]
    fn classify_undecodable_responses_as_permanent() {
        let err = ClientError::InvalidResponse("bad envelope".to_owned());
        assert_eq!(classify(&err), RetryClass::Permanent);
    }

    #[test]
    fn not_received_failures_retry_in_both_modes() {
        let policy = RetryPolicy::default();
        for mode in [RetryMode::Idempotent, RetryMode::NotReceivedOnly] {
            assert!(policy.next_delay(1, RetryClass::NotReceived, mode).is_some());
        }
    }

    #[test]
    fn transient_statuses_retry_only_when_idempotent() {
        let policy = RetryPolicy::default();
        for status in [502, 503, 504] {
            assert!(policy
                .next_delay(1, RetryClass::Status(status), RetryMode::Idempotent)
                .is_some());
            assert!(policy
                .next_delay(1, RetryClass::Status(status), RetryMode::NotReceivedOnly)
                .is_none());
        }
    }

    #[test]
    fn client_mistakes_never_retry() {
        let policy = RetryPolicy::default();
        for status in [400, 401, 404] {
            assert!(policy
                .next_delay(1, RetryClass::Status(status), RetryMode::Idempotent)
                .is_none());
        }
    }

    #[test]
    fn permanent_failures_never_retry() {
        let policy = RetryPolicy::default();
        assert!(policy
            .next_delay(1, RetryClass::Permanent, RetryMode::Idempotent)
            .is_none());
    }

    #[test]
    fn attempts_are_bounded() {
        let policy = RetryPolicy::default();
        assert!(policy
            .next_delay(3, RetryClass::NotReceived, RetryMode::Idempotent)
            .is_some());
        assert!(policy
            .next_delay(4, RetryClass::NotReceived, RetryMode::Idempotent)
            .is_none());
    }

    #[test]
    fn none_policy_disables_retries() {
        let policy = RetryPolicy::none();
        assert!(policy
            .next_delay(1, RetryClass::NotReceived, RetryMode::Idempotent)
            .is_none());
    }

    #[test]
    fn delays_stay_within_the_cap() {
        let policy = RetryPolicy::default();
        for attempt in 1..policy.max_attempts {
            let delay = policy
                .next_delay(attempt, RetryClass::NotReceived, RetryMode::Idempotent)
                .expect("attempt below the bound must retry");
            assert!(delay <= policy.max_delay, "attempt {attempt} delay {delay:?}");
        }
    }

    #[test]
    fn backoff_ceiling_grows_up_to_the_cap() {
        // With jitter drawn from 0..=ceiling we can only assert the bound,
        // so sample repeatedly against the expected per-attempt ceiling.
        let policy = RetryPolicy {
            max_attempts: 8,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(400),
            retryable_statuses: vec![503],
        };
        for (attempt, ceiling_ms) in [(1u32, 100u64), (2, 200), (3, 400), (4, 400), (5, 400)] {
            for _ in 0..32 {
                let delay = policy
                    .next_delay(attempt, RetryClass::NotReceived, RetryMode::Idempotent)
                    .expect("attempt below the bound must retry");
                assert!(delay.as_millis() as u64 <= ceiling_ms);
            }
        }
    }
}
