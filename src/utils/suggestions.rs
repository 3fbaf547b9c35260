//! Alternative label generation.
//!
//! Builds a fixed, ordered set of variations of a label (`getshop`,
//! `shophq`, ...). Output depends only on the input.

use super::label_normalizer::is_valid_label;

/// Prefixes and suffixes combined with the label, in output order.
/// `(prefix, suffix)`: exactly one of them is non-empty, except for the label itself.
const AFFIXES: &[(&str, &str)] = &[
    ("", ""),
    ("get", ""),
    ("my", ""),
    ("", "app"),
    ("", "hq"),
    ("", "pro"),
    ("", "hub"),
    ("", "io"),
    ("try", ""),
    ("", "site"),
];

/// Returns the valid variations of `label`, in a fixed order.
///
/// The first candidate is the label itself. Candidates that break a label
/// rule (for example because they exceed 63 characters) are dropped.
///
/// # Examples
///
/// ```ignore
/// let labels = suggest_labels("shop");
/// assert_eq!(labels[1], "getshop");
/// assert_eq!(labels.len(), 10);
/// ```
pub fn suggest_labels(label: &str) -> Vec<String> {
    AFFIXES
        .iter()
        .map(|(prefix, suffix)| format!("{prefix}{label}{suffix}"))
        .filter(|candidate| is_valid_label(candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_labels_shop() {
        assert_eq!(
            suggest_labels("shop"),
            vec![
                "shop", "getshop", "myshop", "shopapp", "shophq", "shoppro", "shophub", "shopio",
                "tryshop", "shopsite",
            ]
        );
    }

    #[test]
    fn test_suggest_labels_is_deterministic() {
        assert_eq!(suggest_labels("brand"), suggest_labels("brand"));
    }

    #[test]
    fn test_suggest_labels_drops_too_long_candidates() {
        let label = "a".repeat(60);
        let labels = suggest_labels(&label);

        // 60 + "app"/"pro"/"hub"/"get"/"try" = 63 fits, 60 + "site" = 64 does not
        assert_eq!(labels.len(), 9);
        assert!(!labels.iter().any(|l| l.ends_with("site")));
        assert!(labels.iter().all(|l| l.len() <= 63));
    }

    #[test]
    fn test_suggest_labels_at_max_length_keeps_only_label() {
        let label = "z".repeat(63);
        assert_eq!(suggest_labels(&label), vec![label]);
    }

    #[test]
    fn test_suggest_labels_invalid_input() {
        assert!(suggest_labels("-bad").iter().all(|l| is_valid_label(l)));
        assert!(!suggest_labels("-bad").contains(&"-bad".to_string()));
    }
}
