//! DTOs for the TLD catalog endpoints.

use serde::Serialize;

use crate::domain::entities::TldEntry;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TldItem {
    pub extension: String,
    pub base_price: f64,
    pub is_popular: bool,
    pub description: String,
}

impl From<TldEntry> for TldItem {
    fn from(e: TldEntry) -> Self {
        Self {
            extension: e.extension,
            base_price: e.base_price,
            is_popular: e.is_popular,
            description: e.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TldListResponse {
    pub items: Vec<TldItem>,
}
