//! Capability traits for external lookups.
//!
//! Implementations live in `crate::infrastructure::registry`. Mock
//! implementations are generated via `mockall` for service tests.

pub mod availability_provider;

pub use availability_provider::{AvailabilityProvider, ProviderError};

#[cfg(test)]
pub use availability_provider::MockAvailabilityProvider;
