//! Shared helpers for integration tests.

use std::sync::Once;
use std::time::Duration;

use chain_sdk::RetryPolicy;

static TRACING_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chain_sdk=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

/// Retry policy with delays short enough for tests.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        base_delay: Duration::from_millis(5),
        max_delay: Duration::from_millis(20),
        retryable_statuses: vec![502, 503, 504],
    }
}
