//! API route configuration.
//!
//! The search API is public; authentication belongs to the storefront in
//! front of it.

use crate::api::handlers::{
    search_get_handler, search_post_handler, tld_handler, tld_list_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Domain search routes.
///
/// # Endpoints
///
/// - `GET  /domains/search`            - Search by query string (`q`, `tlds`)
/// - `POST /domains/search`            - Search by JSON body (`query`, `tlds`)
/// - `GET  /domains/tlds`              - List offered extensions
/// - `GET  /domains/tlds/{extension}`  - Single extension with its price
pub fn public_routes() -> Router<AppState> {
    let search = Router::new()
        .route(
            "/domains/search",
            get(search_get_handler).post(search_post_handler),
        )
        .layer(rate_limit::search_layer());

    let catalog = Router::new()
        .route("/domains/tlds", get(tld_list_handler))
        .route("/domains/tlds/{extension}", get(tld_handler))
        .layer(rate_limit::layer());

    Router::new().merge(search).merge(catalog)
}
