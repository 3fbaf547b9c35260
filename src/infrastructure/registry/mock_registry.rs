//! Randomized registry stand-in.
//!
//! There is no registry integration: availability is rolled with odds that
//! depend on the label and the suffix, after a simulated network delay.
//! Replacing this type with a real registrar client only requires another
//! [`AvailabilityProvider`] implementation.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::domain::catalog::TldCatalog;
use crate::domain::entities::Verdict;
use crate::domain::providers::{AvailabilityProvider, ProviderError};

/// Labels that are almost always taken.
const COMMON_WORDS: &[&str] = &["app", "web", "site", "online", "store", "shop"];

/// Labels up to this length count as short.
const SHORT_LABEL_MAX: usize = 6;

/// Chance that an unavailable name is offered as premium.
pub const PREMIUM_ODDS: f64 = 0.3;

/// Price multiplier for premium names.
pub const PREMIUM_MARKUP: f64 = 10.0;

/// Simulated lookup latency in milliseconds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: max_ms.max(min_ms),
        }
    }

    /// No delay at all. Used by tests.
    pub fn none() -> Self {
        Self::new(0, 0)
    }
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self::new(300, 500)
    }
}

/// Probability that `label` is available under `suffix`.
///
/// - `.com` with a short or common label: 0.3
/// - any other suffix with a short label: 0.5
/// - everything else: 0.7
pub fn availability_odds(label: &str, suffix: &str) -> f64 {
    let is_short = label.len() <= SHORT_LABEL_MAX;
    let is_common = COMMON_WORDS.contains(&label);

    if suffix == ".com" && (is_short || is_common) {
        0.3
    } else if is_short {
        0.5
    } else {
        0.7
    }
}

/// Builds a verdict from the outcome of the availability and premium rolls.
///
/// A premium name is reported available at `base_price * PREMIUM_MARKUP`.
pub fn quote(
    label: &str,
    suffix: &str,
    base_price: f64,
    available: bool,
    premium: bool,
    registrar_name: &str,
) -> Verdict {
    let is_premium = !available && premium;
    let price = if is_premium {
        round_cents(base_price * PREMIUM_MARKUP)
    } else {
        base_price
    };

    Verdict::new(
        label,
        suffix,
        available || is_premium,
        price,
        is_premium,
        registrar_name,
    )
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Registry stand-in answering from a random number generator.
pub struct MockRegistry {
    catalog: Arc<TldCatalog>,
    registrar_name: String,
    latency: LatencyRange,
    rng: Mutex<StdRng>,
}

impl MockRegistry {
    /// Creates a registry seeded from the operating system.
    pub fn new(
        catalog: Arc<TldCatalog>,
        registrar_name: impl Into<String>,
        latency: LatencyRange,
    ) -> Self {
        Self::with_rng(catalog, registrar_name, latency, StdRng::from_os_rng())
    }

    /// Creates a registry with a fixed seed, producing a repeatable sequence of rolls.
    pub fn with_seed(
        catalog: Arc<TldCatalog>,
        registrar_name: impl Into<String>,
        latency: LatencyRange,
        seed: u64,
    ) -> Self {
        Self::with_rng(catalog, registrar_name, latency, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        catalog: Arc<TldCatalog>,
        registrar_name: impl Into<String>,
        latency: LatencyRange,
        rng: StdRng,
    ) -> Self {
        Self {
            catalog,
            registrar_name: registrar_name.into(),
            latency,
            rng: Mutex::new(rng),
        }
    }

    /// Draws the delay and both rolls under one lock; the guard never crosses an await.
    fn roll(&self, odds: f64) -> (Duration, bool, bool) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let delay = rng.random_range(self.latency.min_ms..=self.latency.max_ms);
        let available = rng.random_bool(odds);
        let premium = !available && rng.random_bool(PREMIUM_ODDS);

        (Duration::from_millis(delay), available, premium)
    }
}

#[async_trait]
impl AvailabilityProvider for MockRegistry {
    async fn check(&self, label: &str, suffix: &str) -> Result<Verdict, ProviderError> {
        let odds = availability_odds(label, suffix);
        let (delay, available, premium) = self.roll(odds);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let verdict = quote(
            label,
            suffix,
            self.catalog.base_price(suffix),
            available,
            premium,
            &self.registrar_name,
        );

        trace!(
            domain = %verdict.full_domain,
            available = verdict.available,
            premium = verdict.is_premium,
            delay_ms = delay.as_millis() as u64,
            "Mock registry answered"
        );

        Ok(verdict)
    }
}
