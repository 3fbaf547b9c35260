//! Timeout and retry decorator for availability providers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::warn;

use crate::domain::entities::Verdict;
use crate::domain::providers::{AvailabilityProvider, ProviderError};

/// Upper bound on a single backoff pause between attempts.
const MAX_BACKOFF: Duration = Duration::from_millis(250);

/// Wraps a provider with a per-call timeout and bounded retries.
///
/// Each attempt is cut off after `timeout`. Transient failures (timeouts,
/// unavailable registry) are retried up to `max_retries` times with jittered
/// exponential backoff; other failures are returned immediately.
pub struct ResilientProvider {
    inner: Arc<dyn AvailabilityProvider>,
    timeout: Duration,
    max_retries: usize,
}

impl ResilientProvider {
    pub fn new(inner: Arc<dyn AvailabilityProvider>, timeout: Duration, max_retries: usize) -> Self {
        Self {
            inner,
            timeout,
            max_retries,
        }
    }

    async fn attempt(&self, label: &str, suffix: &str) -> Result<Verdict, ProviderError> {
        match tokio::time::timeout(self.timeout, self.inner.check(label, suffix)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.timeout.as_millis() as u64)),
        }
    }
}

#[async_trait]
impl AvailabilityProvider for ResilientProvider {
    async fn check(&self, label: &str, suffix: &str) -> Result<Verdict, ProviderError> {
        let started = Instant::now();

        let strategy = ExponentialBackoff::from_millis(10)
            .max_delay(MAX_BACKOFF)
            .map(jitter)
            .take(self.max_retries);

        let result = RetryIf::spawn(
            strategy,
            || self.attempt(label, suffix),
            |err: &ProviderError| {
                let retry = err.is_transient();
                if retry {
                    warn!(label, suffix, error = %err, "Lookup failed, retrying");
                    metrics::counter!("domain_lookup_retries_total").increment(1);
                }
                retry
            },
        )
        .await;

        metrics::histogram!("domain_lookup_duration_seconds")
            .record(started.elapsed().as_secs_f64());
        if result.is_err() {
            metrics::counter!("domain_lookup_failures_total").increment(1);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::MockAvailabilityProvider;
    use mockall::Sequence;

    fn verdict(label: &str, suffix: &str) -> Verdict {
        Verdict::new(label, suffix, true, 12.99, false, "DomainPro")
    }

    #[tokio::test]
    async fn test_passes_through_success() {
        let mut mock = MockAvailabilityProvider::new();
        mock.expect_check()
            .times(1)
            .returning(|label, suffix| Ok(verdict(label, suffix)));

        let provider = ResilientProvider::new(Arc::new(mock), Duration::from_secs(1), 2);
        let result = provider.check("example", ".com").await.unwrap();

        assert_eq!(result.full_domain, "example.com");
    }

    #[tokio::test]
    async fn test_retries_transient_failure() {
        let mut seq = Sequence::new();
        let mut mock = MockAvailabilityProvider::new();
        mock.expect_check()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(ProviderError::Unavailable("503".to_string())));
        mock.expect_check()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|label, suffix| Ok(verdict(label, suffix)));

        let provider = ResilientProvider::new(Arc::new(mock), Duration::from_secs(1), 2);

        assert!(provider.check("example", ".com").await.is_ok());
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let mut mock = MockAvailabilityProvider::new();
        mock.expect_check()
            .times(3)
            .returning(|_, _| Err(ProviderError::Unavailable("503".to_string())));

        let provider = ResilientProvider::new(Arc::new(mock), Duration::from_secs(1), 2);
        let err = provider.check("example", ".com").await.unwrap_err();

        assert!(matches!(err, ProviderError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_does_not_retry_permanent_failure() {
        let mut mock = MockAvailabilityProvider::new();
        mock.expect_check()
            .times(1)
            .returning(|_, _| Err(ProviderError::InvalidResponse("garbage".to_string())));

        let provider = ResilientProvider::new(Arc::new(mock), Duration::from_secs(1), 5);
        let err = provider.check("example", ".com").await.unwrap_err();

        assert_eq!(err, ProviderError::InvalidResponse("garbage".to_string()));
    }

    struct SlowProvider;

    #[async_trait]
    impl AvailabilityProvider for SlowProvider {
        async fn check(&self, label: &str, suffix: &str) -> Result<Verdict, ProviderError> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(verdict(label, suffix))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_slow_lookup() {
        let provider = ResilientProvider::new(Arc::new(SlowProvider), Duration::from_millis(100), 1);
        let err = provider.check("example", ".com").await.unwrap_err();

        assert_eq!(err, ProviderError::Timeout(100));
    }
}
