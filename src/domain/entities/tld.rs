//! Suffix catalog entry.

use serde::{Deserialize, Serialize};

/// A top-level domain suffix offered for registration.
///
/// `extension` always carries its leading dot (`.com`, not `com`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TldEntry {
    pub extension: String,
    pub base_price: f64,
    pub is_popular: bool,
    pub description: String,
}

impl TldEntry {
    pub fn new(
        extension: impl Into<String>,
        base_price: f64,
        is_popular: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            extension: extension.into(),
            base_price,
            is_popular,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let entry: TldEntry = serde_json::from_str(
            r#"{"extension":".dev","basePrice":15.99,"isPopular":false,"description":"Developers"}"#,
        )
        .unwrap();

        assert_eq!(entry, TldEntry::new(".dev", 15.99, false, "Developers"));
    }

    #[test]
    fn test_serialize_camel_case() {
        let value = serde_json::to_value(TldEntry::new(".com", 12.99, true, "Commercial")).unwrap();

        assert_eq!(value["extension"], ".com");
        assert_eq!(value["basePrice"], 12.99);
        assert_eq!(value["isPopular"], true);
    }
}
