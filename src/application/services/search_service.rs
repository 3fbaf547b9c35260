//! Domain search orchestration.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::domain::catalog::{TldCatalog, is_valid_extension};
use crate::domain::entities::{SearchOutcome, TldEntry, Verdict};
use crate::domain::providers::AvailabilityProvider;
use crate::error::AppError;
use crate::utils::label_normalizer::parse_query;
use crate::utils::suggestions::suggest_labels;

/// Number of alternative labels looked up per search.
pub const SUGGESTION_CANDIDATES: usize = 5;

/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 10;

/// Suffixes checked for every alternative label, in output order.
pub const SUGGESTION_SUFFIXES: &[&str] = &[".com", ".io"];

/// Service answering domain searches.
///
/// Normalizes the query, fans out one availability lookup per suffix, and
/// assembles primary results plus available suggestions. Lookups run as
/// concurrent tasks; results are reordered by their request position, never
/// by completion time.
#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn AvailabilityProvider>,
    catalog: Arc<TldCatalog>,
    max_suffixes: usize,
}

impl SearchService {
    /// Creates a new search service.
    ///
    /// `max_suffixes` caps how many suffixes a single search may request.
    pub fn new(
        provider: Arc<dyn AvailabilityProvider>,
        catalog: Arc<TldCatalog>,
        max_suffixes: usize,
    ) -> Self {
        Self {
            provider,
            catalog,
            max_suffixes,
        }
    }

    pub fn catalog(&self) -> &TldCatalog {
        &self.catalog
    }

    /// The availability provider behind this service, for direct probes.
    pub fn provider(&self) -> &dyn AvailabilityProvider {
        self.provider.as_ref()
    }

    /// Looks up a single catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the extension is not offered.
    pub fn get_tld(&self, extension: &str) -> Result<TldEntry, AppError> {
        let extension = clean_suffix(extension);

        self.catalog.get(&extension).cloned().ok_or_else(|| {
            AppError::not_found("Extension not found", json!({ "extension": extension }))
        })
    }

    /// Checks one label under one suffix.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the provider fails.
    pub async fn check_one(&self, label: &str, suffix: &str) -> Result<Verdict, AppError> {
        self.provider.check(label, suffix).await.map_err(|e| {
            error!(label, suffix, error = %e, "Availability lookup failed");
            AppError::search_failed(json!({
                "label": label,
                "suffix": suffix,
                "reason": e.to_string(),
            }))
        })
    }

    /// Checks `label` under every suffix concurrently.
    ///
    /// Returns one verdict per suffix in the order of `suffixes`. The first
    /// failing lookup fails the whole call; the remaining tasks are aborted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if any lookup fails or a task panics.
    pub async fn search_many(
        &self,
        label: &str,
        suffixes: &[String],
    ) -> Result<Vec<Verdict>, AppError> {
        let mut tasks = JoinSet::new();

        for (index, suffix) in suffixes.iter().enumerate() {
            let service = self.clone();
            let label = label.to_string();
            let suffix = suffix.clone();
            tasks.spawn(async move { (index, service.check_one(&label, &suffix).await) });
        }

        let mut slots: Vec<Option<Verdict>> = (0..suffixes.len()).map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| {
                error!(label, error = %e, "Availability task did not complete");
                AppError::search_failed(json!({ "label": label, "reason": e.to_string() }))
            })?;
            slots[index] = Some(result?);
        }

        slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                AppError::search_failed(json!({ "label": label, "reason": "missing result" }))
            })
    }

    /// Looks up the first [`SUGGESTION_CANDIDATES`] alternatives of `label`
    /// under [`SUGGESTION_SUFFIXES`] and keeps the first ten available ones.
    ///
    /// Output order is candidate order, then suffix order within a candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if any lookup fails.
    pub async fn suggest(&self, label: &str) -> Result<Vec<Verdict>, AppError> {
        let suffixes: Vec<String> = SUGGESTION_SUFFIXES.iter().map(|s| s.to_string()).collect();
        let candidates: Vec<String> = suggest_labels(label)
            .into_iter()
            .take(SUGGESTION_CANDIDATES)
            .collect();

        let mut tasks = JoinSet::new();
        for (index, candidate) in candidates.iter().enumerate() {
            let service = self.clone();
            let candidate = candidate.clone();
            let suffixes = suffixes.clone();
            tasks.spawn(async move { (index, service.search_many(&candidate, &suffixes).await) });
        }

        let mut groups: Vec<Vec<Verdict>> = vec![Vec::new(); candidates.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| {
                error!(label, error = %e, "Suggestion task did not complete");
                AppError::search_failed(json!({ "label": label, "reason": e.to_string() }))
            })?;
            groups[index] = result?;
        }

        Ok(groups
            .into_iter()
            .flatten()
            .filter(|verdict| verdict.available)
            .take(MAX_SUGGESTIONS)
            .collect())
    }

    /// Runs a full search for a raw query.
    ///
    /// # Flow
    ///
    /// 1. Normalize and validate the query
    /// 2. Resolve the suffix list (popular catalog entries when none requested)
    /// 3. Look up the label under every suffix
    /// 4. Look up alternative labels, concurrently with step 3
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing or invalid query or
    /// suffix list, and [`AppError::Internal`] if the lookup fan-out fails.
    pub async fn search(
        &self,
        raw_query: Option<&str>,
        requested_suffixes: Option<&[String]>,
    ) -> Result<SearchOutcome, AppError> {
        let label = parse_query(raw_query).inspect_err(|_| {
            metrics::counter!("domain_searches_rejected_total").increment(1);
        })?;
        let suffixes = self.resolve_suffixes(requested_suffixes).inspect_err(|_| {
            metrics::counter!("domain_searches_rejected_total").increment(1);
        })?;

        debug!(label = %label, suffixes = ?suffixes, "Searching domains");

        let (primary, suggestions) =
            tokio::try_join!(self.search_many(&label, &suffixes), self.suggest(&label))?;

        info!(
            label = %label,
            primary = primary.len(),
            suggestions = suggestions.len(),
            "Domain search completed"
        );
        metrics::counter!("domain_searches_total").increment(1);

        Ok(SearchOutcome {
            normalized_query: label,
            primary,
            suggestions,
            generated_at_epoch_millis: Utc::now().timestamp_millis(),
        })
    }

    /// Cleans the requested suffixes or falls back to the popular ones.
    ///
    /// Entries are trimmed, lower-cased and given a leading dot; blank entries
    /// are dropped. Duplicates are kept so every requested position gets a row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if more suffixes than allowed are
    /// requested, or if one is not a well-formed extension.
    pub fn resolve_suffixes(&self, requested: Option<&[String]>) -> Result<Vec<String>, AppError> {
        let cleaned: Vec<String> = requested
            .unwrap_or_default()
            .iter()
            .map(|s| clean_suffix(s))
            .filter(|s| !s.is_empty())
            .collect();

        if cleaned.is_empty() {
            return Ok(self.catalog.popular_extensions());
        }

        if cleaned.len() > self.max_suffixes {
            return Err(AppError::bad_request(
                format!("Too many extensions requested (max {})", self.max_suffixes),
                json!({ "requested": cleaned.len(), "max": self.max_suffixes }),
            ));
        }

        if let Some(bad) = cleaned.iter().find(|s| !is_valid_extension(s)) {
            return Err(AppError::bad_request(
                "Invalid extension. Use only letters, numbers, and hyphens",
                json!({ "extension": bad }),
            ));
        }

        Ok(cleaned)
    }
}

/// Normalizes one requested suffix: `" COM "` becomes `".com"`.
fn clean_suffix(raw: &str) -> String {
    let trimmed = raw.trim().to_lowercase();
    if trimmed.is_empty() || trimmed.starts_with('.') {
        trimmed
    } else {
        format!(".{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::{MockAvailabilityProvider, ProviderError};
    use crate::infrastructure::registry::{LatencyRange, MockRegistry};
    use std::time::Duration;

    fn suffixes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn service_with(mock: MockAvailabilityProvider) -> SearchService {
        SearchService::new(Arc::new(mock), Arc::new(TldCatalog::default()), 25)
    }

    fn seeded_service(seed: u64) -> SearchService {
        let catalog = Arc::new(TldCatalog::default());
        let registry =
            MockRegistry::with_seed(catalog.clone(), "DomainPro", LatencyRange::none(), seed);
        SearchService::new(Arc::new(registry), catalog, 25)
    }

    /// Provider that answers later for earlier suffixes, so completion order is reversed.
    struct ReversedLatency;

    #[async_trait::async_trait]
    impl AvailabilityProvider for ReversedLatency {
        async fn check(&self, label: &str, suffix: &str) -> Result<Verdict, ProviderError> {
            let delay = match suffix {
                ".com" => 300,
                ".net" => 200,
                ".org" => 100,
                _ => 0,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(Verdict::new(label, suffix, true, 1.0, false, "DomainPro"))
        }
    }

    #[tokio::test]
    async fn test_search_many_preserves_request_order() {
        let service = SearchService::new(
            Arc::new(ReversedLatency),
            Arc::new(TldCatalog::default()),
            25,
        );

        let requested = suffixes(&[".com", ".net", ".org", ".io"]);
        let results = service.search_many("example", &requested).await.unwrap();

        let extensions: Vec<&str> = results.iter().map(|v| v.extension.as_str()).collect();
        assert_eq!(extensions, vec![".com", ".net", ".org", ".io"]);
    }

    #[tokio::test]
    async fn test_search_many_empty_suffixes() {
        let service = seeded_service(1);
        let results = service.search_many("example", &[]).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_many_fails_when_one_lookup_fails() {
        let mut mock = MockAvailabilityProvider::new();
        mock.expect_check().returning(|label, suffix| {
            if suffix == ".net" {
                Err(ProviderError::Unavailable("down".to_string()))
            } else {
                Ok(Verdict::new(label, suffix, true, 1.0, false, "DomainPro"))
            }
        });

        let service = service_with(mock);
        let err = service
            .search_many("example", &suffixes(&[".com", ".net", ".org"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), "Failed to search domains");
    }

    #[tokio::test]
    async fn test_suggest_keeps_candidate_then_suffix_order() {
        let mut mock = MockAvailabilityProvider::new();
        mock.expect_check()
            .returning(|label, suffix| {
                Ok(Verdict::new(label, suffix, true, 1.0, false, "DomainPro"))
            });

        let service = service_with(mock);
        let results = service.suggest("shop").await.unwrap();

        let domains: Vec<&str> = results.iter().map(|v| v.full_domain.as_str()).collect();
        assert_eq!(
            domains,
            vec![
                "shop.com",
                "shop.io",
                "getshop.com",
                "getshop.io",
                "myshop.com",
                "myshop.io",
                "shopapp.com",
                "shopapp.io",
                "shophq.com",
                "shophq.io",
            ]
        );
    }

    #[tokio::test]
    async fn test_suggest_filters_unavailable() {
        let mut mock = MockAvailabilityProvider::new();
        mock.expect_check().returning(|label, suffix| {
            let available = suffix == ".io";
            Ok(Verdict::new(label, suffix, available, 1.0, false, "DomainPro"))
        });

        let service = service_with(mock);
        let results = service.suggest("brand").await.unwrap();

        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|v| v.available && v.extension == ".io"));
        assert_eq!(results[0].full_domain, "brand.io");
        assert_eq!(results[3].full_domain, "brandapp.io");
        assert_eq!(results[4].full_domain, "brandhq.io");
    }

    #[tokio::test]
    async fn test_suggest_checks_five_candidates_on_two_suffixes() {
        let mut mock = MockAvailabilityProvider::new();
        mock.expect_check()
            .times(10)
            .returning(|label, suffix| {
                Ok(Verdict::new(label, suffix, false, 1.0, false, "DomainPro"))
            });

        let service = service_with(mock);
        let results = service.suggest("brand").await.unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_uses_popular_defaults() {
        let service = seeded_service(5);
        let outcome = service.search(Some("Example.com"), None).await.unwrap();

        assert_eq!(outcome.normalized_query, "example");
        let extensions: Vec<&str> = outcome.primary.iter().map(|v| v.extension.as_str()).collect();
        assert_eq!(extensions, vec![".com", ".net", ".org", ".io", ".co"]);
    }

    #[tokio::test]
    async fn test_search_primary_matches_requested_order() {
        let service = seeded_service(9);
        let requested = suffixes(&[".xyz", "ai", ".COM", ".unknown", ".com"]);
        let outcome = service
            .search(Some("my_cool site!!"), Some(&requested))
            .await
            .unwrap();

        assert_eq!(outcome.normalized_query, "my-cool-site");
        let extensions: Vec<&str> = outcome.primary.iter().map(|v| v.extension.as_str()).collect();
        assert_eq!(extensions, vec![".xyz", ".ai", ".com", ".unknown", ".com"]);
        for verdict in &outcome.primary {
            assert!(verdict.full_domain.starts_with("my-cool-site."));
        }
    }

    #[tokio::test]
    async fn test_search_suggestions_bounded_and_available() {
        for seed in 0..20 {
            let service = seeded_service(seed);
            let outcome = service.search(Some("coffee"), None).await.unwrap();

            assert!(outcome.suggestions.len() <= MAX_SUGGESTIONS);
            assert!(outcome.suggestions.iter().all(|v| v.available));
        }
    }

    #[tokio::test]
    async fn test_search_sets_timestamp() {
        let before = Utc::now().timestamp_millis();
        let outcome = seeded_service(2).search(Some("clock"), None).await.unwrap();
        assert!(outcome.generated_at_epoch_millis >= before);
    }

    #[tokio::test]
    async fn test_search_rejects_missing_query() {
        let service = service_with(MockAvailabilityProvider::new());

        let err = service.search(None, None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_search_rejects_query_without_label() {
        let service = service_with(MockAvailabilityProvider::new());

        let err = service.search(Some("!!!"), None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_search_reports_upstream_failure() {
        let mut mock = MockAvailabilityProvider::new();
        mock.expect_check()
            .returning(|_, _| Err(ProviderError::Timeout(2000)));

        let service = service_with(mock);
        let err = service.search(Some("example"), None).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_resolve_suffixes_defaults_when_blank() {
        let service = seeded_service(0);
        let requested = suffixes(&["", "  "]);

        assert_eq!(
            service.resolve_suffixes(Some(&requested)).unwrap(),
            TldCatalog::default().popular_extensions()
        );
    }

    #[test]
    fn test_resolve_suffixes_cleans_entries() {
        let service = seeded_service(0);
        let requested = suffixes(&[" COM ", ".io", "co.uk"]);

        assert_eq!(
            service.resolve_suffixes(Some(&requested)).unwrap(),
            vec![".com", ".io", ".co.uk"]
        );
    }

    #[test]
    fn test_resolve_suffixes_rejects_too_many() {
        let catalog = Arc::new(TldCatalog::default());
        let registry =
            MockRegistry::with_seed(catalog.clone(), "DomainPro", LatencyRange::none(), 0);
        let service = SearchService::new(Arc::new(registry), catalog, 2);

        let err = service
            .resolve_suffixes(Some(&suffixes(&[".com", ".net", ".org"])))
            .unwrap_err();
        assert!(err.to_string().contains("max 2"));
    }

    #[test]
    fn test_resolve_suffixes_rejects_malformed() {
        let service = seeded_service(0);
        let err = service
            .resolve_suffixes(Some(&suffixes(&[".com", ".c*m"])))
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_get_tld() {
        let service = seeded_service(0);

        assert_eq!(service.get_tld("io").unwrap().base_price, 39.99);
        assert!(matches!(
            service.get_tld(".zz").unwrap_err(),
            AppError::NotFound { .. }
        ));
    }
}
