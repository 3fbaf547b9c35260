//! Availability providers.
//!
//! Provides [`AvailabilityProvider`](crate::domain::providers::AvailabilityProvider)
//! implementations:
//! - [`MockRegistry`] - Randomized stand-in for a registrar API
//! - [`ResilientProvider`] - Timeout and bounded retry around another provider

mod mock_registry;
mod resilient;

pub use mock_registry::{
    LatencyRange, MockRegistry, PREMIUM_MARKUP, PREMIUM_ODDS, availability_odds, quote,
};
pub use resilient::ResilientProvider;
