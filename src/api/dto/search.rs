//! DTOs for the domain search endpoints.

use serde::{Deserialize, Serialize};
use serde_with::formats::CommaSeparator;
use serde_with::{StringWithSeparator, serde_as};
use validator::Validate;

use crate::domain::entities::{SearchOutcome, Verdict};

/// Query string of `GET /api/domains/search`.
///
/// `tlds` is a comma-separated list (`?q=example&tlds=.com,.io`).
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,

    #[serde_as(as = "Option<StringWithSeparator::<CommaSeparator, String>>")]
    pub tlds: Option<Vec<String>>,
}

/// Body of `POST /api/domains/search`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    /// Raw user input, normalized server-side.
    #[validate(length(max = 253, message = "Query is too long"))]
    pub query: Option<String>,

    /// Extensions to check; popular ones when omitted.
    #[validate(length(max = 100, message = "Too many extensions"))]
    pub tlds: Option<Vec<String>>,
}

/// Availability of one domain.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictItem {
    pub full_domain: String,
    pub available: bool,
    pub price: f64,
    pub extension: String,
    pub is_premium: bool,
    pub registrar_name: String,
}

impl From<Verdict> for VerdictItem {
    fn from(v: Verdict) -> Self {
        Self {
            full_domain: v.full_domain,
            available: v.available,
            price: v.price,
            extension: v.extension,
            is_premium: v.is_premium,
            registrar_name: v.registrar_name,
        }
    }
}

/// Search result: primary rows in requested order plus suggestions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub normalized_query: String,
    pub primary_results: Vec<VerdictItem>,
    pub suggestion_results: Vec<VerdictItem>,
    pub generated_at_epoch_millis: i64,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            normalized_query: outcome.normalized_query,
            primary_results: outcome.primary.into_iter().map(VerdictItem::from).collect(),
            suggestion_results: outcome
                .suggestions
                .into_iter()
                .map(VerdictItem::from)
                .collect(),
            generated_at_epoch_millis: outcome.generated_at_epoch_millis,
        }
    }
}
