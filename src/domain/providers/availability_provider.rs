//! Availability lookup capability.

use crate::domain::entities::Verdict;
use async_trait::async_trait;

/// Errors a lookup can fail with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Lookup timed out after {0} ms")]
    Timeout(u64),

    #[error("Registry unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid registry response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Whether retrying the same lookup may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Unavailable(_))
    }
}

/// Answers "can `label` + `suffix` be registered, and at what price".
///
/// Lookups are independent of each other: the aggregator calls `check`
/// concurrently for many suffixes and labels.
///
/// # Implementations
///
/// - [`crate::infrastructure::registry::MockRegistry`] - Randomized stand-in for a registry
/// - [`crate::infrastructure::registry::ResilientProvider`] - Timeout and retry decorator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    /// Checks one label under one suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the lookup could not be answered.
    async fn check(&self, label: &str, suffix: &str) -> Result<Verdict, ProviderError>;
}
