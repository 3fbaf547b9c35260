#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    routing::get,
};
use domain_search::api::handlers::{
    health_handler, search_get_handler, search_post_handler, tld_handler, tld_list_handler,
};
use domain_search::application::services::SearchService;
use domain_search::domain::catalog::TldCatalog;
use domain_search::domain::entities::Verdict;
use domain_search::domain::providers::{AvailabilityProvider, ProviderError};
use domain_search::infrastructure::registry::{LatencyRange, MockRegistry};
use domain_search::state::AppState;

/// Zero-latency, seeded registry so tests run fast and repeatably.
pub fn create_test_state(seed: u64) -> AppState {
    let catalog = Arc::new(TldCatalog::default());
    let registry = MockRegistry::with_seed(catalog.clone(), "DomainPro", LatencyRange::none(), seed);
    state_with_provider(Arc::new(registry), catalog)
}

pub fn state_with_provider(
    provider: Arc<dyn AvailabilityProvider>,
    catalog: Arc<TldCatalog>,
) -> AppState {
    AppState::new(Arc::new(SearchService::new(provider, catalog, 25)))
}

/// Router with the API handlers and no rate limiting.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/domains/search",
            get(search_get_handler).post(search_post_handler),
        )
        .route("/api/domains/tlds", get(tld_list_handler))
        .route("/api/domains/tlds/{extension}", get(tld_handler))
        .with_state(state)
}

/// Provider that always fails.
pub struct FailingProvider;

#[async_trait]
impl AvailabilityProvider for FailingProvider {
    async fn check(&self, _label: &str, _suffix: &str) -> Result<Verdict, ProviderError> {
        Err(ProviderError::Unavailable("registry offline".to_string()))
    }
}

/// Provider that reports every name available at the catalog price.
pub struct EverythingAvailable {
    pub catalog: Arc<TldCatalog>,
}

#[async_trait]
impl AvailabilityProvider for EverythingAvailable {
    async fn check(&self, label: &str, suffix: &str) -> Result<Verdict, ProviderError> {
        Ok(Verdict::new(
            label,
            suffix,
            true,
            self.catalog.base_price(suffix),
            false,
            "DomainPro",
        ))
    }
}
