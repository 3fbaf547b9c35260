//! Suffix catalog: the read-only table of offered TLDs and their prices.
//!
//! The catalog is built once at startup (built-in table or JSON file), wrapped
//! in an `Arc` and shared by every lookup. It has no interior mutability.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::TldEntry;

/// Price used for extensions missing from the catalog.
pub const DEFAULT_BASE_PRICE: f64 = 9.99;

/// A syntactically valid extension: a dot followed by one or more labels.
static EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)+$").expect("extension regex is valid")
});

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog must contain at least one entry")]
    Empty,

    #[error("Catalog must flag at least one entry as popular")]
    NoPopular,

    #[error("Invalid extension '{0}'")]
    InvalidExtension(String),

    #[error("Duplicate extension '{0}'")]
    DuplicateExtension(String),

    #[error("Invalid price {price} for extension '{extension}'")]
    InvalidPrice { extension: String, price: f64 },
}

/// Immutable list of TLD entries, in display order.
#[derive(Debug, Clone)]
pub struct TldCatalog {
    entries: Vec<TldEntry>,
}

impl TldCatalog {
    /// Builds a catalog after checking every entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the list is empty, has no popular entry,
    /// contains a malformed or duplicate extension, or a negative price.
    pub fn new(entries: Vec<TldEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_valid_extension(&entry.extension) {
                return Err(CatalogError::InvalidExtension(entry.extension.clone()));
            }
            if !seen.insert(entry.extension.as_str()) {
                return Err(CatalogError::DuplicateExtension(entry.extension.clone()));
            }
            if !entry.base_price.is_finite() || entry.base_price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    extension: entry.extension.clone(),
                    price: entry.base_price,
                });
            }
        }

        if !entries.iter().any(|e| e.is_popular) {
            return Err(CatalogError::NoPopular);
        }

        Ok(Self { entries })
    }

    /// Loads a catalog from a JSON array of entries.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<TldEntry> = serde_json::from_str(&raw)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[TldEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, extension: &str) -> Option<&TldEntry> {
        self.entries.iter().find(|e| e.extension == extension)
    }

    /// Base price for `extension`, or [`DEFAULT_BASE_PRICE`] when unknown.
    pub fn base_price(&self, extension: &str) -> f64 {
        self.get(extension)
            .map(|e| e.base_price)
            .unwrap_or(DEFAULT_BASE_PRICE)
    }

    /// Extensions flagged popular, in catalog order. Used when a search names no suffixes.
    pub fn popular_extensions(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.is_popular)
            .map(|e| e.extension.clone())
            .collect()
    }
}

impl Default for TldCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                TldEntry::new(".com", 12.99, true, "The most recognized domain extension"),
                TldEntry::new(".net", 14.99, true, "Ideal for networks and technology"),
                TldEntry::new(".org", 13.99, true, "Perfect for organizations"),
                TldEntry::new(".io", 39.99, true, "Popular with tech startups"),
                TldEntry::new(".co", 29.99, true, "A short alternative to .com"),
                TldEntry::new(".dev", 15.99, false, "Built for developers"),
                TldEntry::new(".app", 17.99, false, "Made for applications"),
                TldEntry::new(".ai", 79.99, false, "For artificial intelligence projects"),
                TldEntry::new(".xyz", 2.99, false, "Affordable and versatile"),
            ],
        }
    }
}

/// Checks that `extension` is a leading dot followed by lower-case label characters.
pub fn is_valid_extension(extension: &str) -> bool {
    extension.len() <= 64 && EXTENSION_REGEX.is_match(extension)
}
