//! Domain label normalization and validation.
//!
//! Turns whatever a user typed into the search box (`HTTPS://www.Example.com/`,
//! `my_cool site!!`) into a canonical label, and checks the label against
//! hostname label rules.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// Maximum length of a single DNS label.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Suffixes stripped from the end of the input before sanitizing.
pub const RECOGNIZED_SUFFIXES: &[&str] = &[
    ".com", ".net", ".org", ".io", ".co", ".dev", ".app", ".ai", ".xyz",
];

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("separator regex is valid"));

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("charset regex is valid"));

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("hyphen regex is valid"));

static LABEL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").expect("label regex is valid")
});

/// Rule a candidate label breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LabelViolation {
    #[error("label is empty")]
    Empty,

    #[error("label is longer than 63 characters")]
    TooLong,

    #[error("label may contain only letters, numbers, and hyphens")]
    InvalidCharacters,

    #[error("label must start and end with a letter or number")]
    HyphenAtEdge,

    #[error("label must not contain consecutive hyphens")]
    ConsecutiveHyphens,
}

impl LabelViolation {
    /// Stable identifier reported in error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooLong => "too_long",
            Self::InvalidCharacters => "invalid_characters",
            Self::HyphenAtEdge => "hyphen_at_edge",
            Self::ConsecutiveHyphens => "consecutive_hyphens",
        }
    }
}

/// Normalizes raw user input into a domain label.
///
/// # Normalization Rules
///
/// 1. Trim whitespace, lower-case
/// 2. Drop a leading `http://` / `https://`, then a leading `www.`
/// 3. Drop one trailing `/`
/// 4. Drop one trailing recognized suffix (see [`RECOGNIZED_SUFFIXES`])
/// 5. Whitespace and underscore runs become a single hyphen
/// 6. Remove characters outside `[a-z0-9-]`
/// 7. Collapse hyphen runs
/// 8. Trim hyphens from both ends
///
/// Never fails. The result may be empty or otherwise invalid; check it with
/// [`is_valid_label`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_label("HTTPS://WWW.Example.com/"), "example");
/// assert_eq!(normalize_label("my_cool site!!"), "my-cool-site");
/// ```
pub fn normalize_label(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let mut rest = lowered.as_str();
    rest = rest
        .strip_prefix("https://")
        .or_else(|| rest.strip_prefix("http://"))
        .unwrap_or(rest);
    rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest = rest.strip_suffix('/').unwrap_or(rest);

    if let Some(stripped) = RECOGNIZED_SUFFIXES
        .iter()
        .find_map(|suffix| rest.strip_suffix(suffix))
    {
        rest = stripped;
    }

    let hyphenated = SEPARATOR_RUN.replace_all(rest, "-");
    let filtered = DISALLOWED_CHARS.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&filtered, "-");

    collapsed.trim_matches('-').to_string()
}

/// Returns the first label rule `label` breaks, if any.
pub fn label_violation(label: &str) -> Option<LabelViolation> {
    if label.is_empty() {
        return Some(LabelViolation::Empty);
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Some(LabelViolation::TooLong);
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Some(LabelViolation::InvalidCharacters);
    }
    if !LABEL_SHAPE.is_match(label) {
        return Some(LabelViolation::HyphenAtEdge);
    }
    if label.contains("--") {
        return Some(LabelViolation::ConsecutiveHyphens);
    }
    None
}

/// Checks a label against all label rules.
pub fn is_valid_label(label: &str) -> bool {
    label_violation(label).is_none()
}

/// Normalizes a search query and rejects it when no usable label remains.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the query is missing or blank, or if
/// the normalized label breaks a label rule.
pub fn parse_query(raw: Option<&str>) -> Result<String, AppError> {
    let raw = match raw {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            return Err(AppError::bad_request(
                "Domain query is required",
                json!({ "field": "q" }),
            ));
        }
    };

    let label = normalize_label(raw);

    match label_violation(&label) {
        None => Ok(label),
        Some(violation) => Err(AppError::bad_request(
            "Invalid domain name. Use only letters, numbers, and hyphens",
            json!({
                "normalized": label,
                "rule": violation.code(),
                "reason": violation.to_string(),
            }),
        )),
    }
}
