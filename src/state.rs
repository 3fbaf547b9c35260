//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::SearchService;

/// Handler state. Cloned per request; all members are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<SearchService>,
}

impl AppState {
    pub fn new(search_service: Arc<SearchService>) -> Self {
        Self { search_service }
    }
}
