//! Handlers for the TLD catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::tld::{TldItem, TldListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every offered extension with its base price.
///
/// # Endpoint
///
/// `GET /api/domains/tlds`
pub async fn tld_list_handler(State(state): State<AppState>) -> Json<TldListResponse> {
    let items = state
        .search_service
        .catalog()
        .entries()
        .iter()
        .cloned()
        .map(TldItem::from)
        .collect();

    Json(TldListResponse { items })
}

/// Returns a single catalog entry. The leading dot is optional.
///
/// # Endpoint
///
/// `GET /api/domains/tlds/{extension}`
///
/// # Errors
///
/// Returns 404 Not Found if the extension is not offered.
pub async fn tld_handler(
    State(state): State<AppState>,
    Path(extension): Path<String>,
) -> Result<Json<TldItem>, AppError> {
    let entry = state.search_service.get_tld(&extension)?;

    Ok(Json(entry.into()))
}
