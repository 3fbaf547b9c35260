//! Handlers for the domain search endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::search::{SearchParams, SearchRequest, SearchResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Searches a domain name across extensions, with suggestions.
///
/// # Endpoint
///
/// `GET /api/domains/search?q=<query>&tlds=<comma-separated>`
///
/// `tlds` is optional; popular extensions are checked when it is omitted.
///
/// # Response
///
/// ```json
/// {
///   "normalizedQuery": "example",
///   "primaryResults": [
///     {
///       "fullDomain": "example.com",
///       "available": false,
///       "price": 12.99,
///       "extension": ".com",
///       "isPremium": false,
///       "registrarName": "DomainPro"
///     }
///   ],
///   "suggestionResults": [],
///   "generatedAtEpochMillis": 1760000000000
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `q` is missing or normalizes to an invalid label.
/// Returns 500 Internal Server Error if the availability lookups fail.
pub async fn search_get_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let outcome = state
        .search_service
        .search(params.q.as_deref(), params.tlds.as_deref())
        .await?;

    Ok(Json(outcome.into()))
}

/// Same as [`search_get_handler`] with the query in a JSON body.
///
/// # Endpoint
///
/// `POST /api/domains/search`
///
/// # Request Body
///
/// ```json
/// { "query": "My Cool Site", "tlds": [".com", ".io"] }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON of the expected shape,
/// fails validation, or the query is missing or invalid. Returns 500 Internal Server Error if the lookups fail.
pub async fn search_post_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let outcome = state
        .search_service
        .search(payload.query.as_deref(), payload.tlds.as_deref())
        .await?;

    Ok(Json(outcome.into()))
}
