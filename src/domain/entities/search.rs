//! Aggregated search result.

use super::Verdict;

/// Everything produced for one search query.
///
/// `primary` holds one verdict per requested suffix in request order.
/// `suggestions` holds at most ten available verdicts for alternative labels.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub normalized_query: String,
    pub primary: Vec<Verdict>,
    pub suggestions: Vec<Verdict>,
    pub generated_at_epoch_millis: i64,
}
