//! Availability verdict for a single label and suffix.

/// Result of one availability lookup.
///
/// A premium verdict reports `available == true` while its price carries the
/// premium markup: the name is taken at the standard price but can still be
/// ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub full_domain: String,
    pub available: bool,
    pub price: f64,
    pub extension: String,
    pub is_premium: bool,
    pub registrar_name: String,
}

impl Verdict {
    /// Creates a verdict for `label` under `extension`.
    pub fn new(
        label: &str,
        extension: &str,
        available: bool,
        price: f64,
        is_premium: bool,
        registrar_name: impl Into<String>,
    ) -> Self {
        Self {
            full_domain: format!("{label}{extension}"),
            available,
            price,
            extension: extension.to_string(),
            is_premium,
            registrar_name: registrar_name.into(),
        }
    }
}
