//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REGISTRAR_NAME` - Registrar brand reported on every result (default: `DomainPro`)
//! - `TLD_CATALOG_PATH` - JSON file replacing the built-in TLD catalog
//! - `LOOKUP_TIMEOUT_MS` - Per-lookup timeout (default: 2000)
//! - `LOOKUP_MAX_RETRIES` - Retries on transient lookup failure (default: 2, max: 10)
//! - `MOCK_LATENCY_MIN_MS` / `MOCK_LATENCY_MAX_MS` - Simulated registry latency
//!   (default: 300 / 500)
//! - `MAX_TLDS_PER_SEARCH` - Extensions allowed per search (default: 25, max: 100)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::catalog::TldCatalog;
use crate::infrastructure::registry::LatencyRange;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Brand string reported as `registrarName` on every verdict.
    pub registrar_name: String,
    /// Optional catalog file. The built-in catalog is used when `None`.
    pub tld_catalog_path: Option<String>,
    /// Cut-off for a single availability lookup in milliseconds.
    pub lookup_timeout_ms: u64,
    /// Retries after a transient lookup failure. Zero disables retrying.
    pub lookup_max_retries: usize,
    pub mock_latency_min_ms: u64,
    pub mock_latency_max_ms: u64,
    /// Upper bound on extensions a single search may request.
    pub max_tlds_per_search: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            registrar_name: "DomainPro".to_string(),
            tld_catalog_path: None,
            lookup_timeout_ms: 2000,
            lookup_max_retries: 2,
            mock_latency_min_ms: 300,
            mock_latency_max_ms: 500,
            max_tlds_per_search: 25,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `REGISTRAR_NAME` is set but blank.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let registrar_name = match env::var("REGISTRAR_NAME") {
            Ok(name) if name.trim().is_empty() => {
                anyhow::bail!("REGISTRAR_NAME must not be blank")
            }
            Ok(name) => name.trim().to_string(),
            Err(_) => defaults.registrar_name,
        };

        let tld_catalog_path = env::var("TLD_CATALOG_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            registrar_name,
            tld_catalog_path,
            lookup_timeout_ms: parse_or("LOOKUP_TIMEOUT_MS", defaults.lookup_timeout_ms),
            lookup_max_retries: parse_or("LOOKUP_MAX_RETRIES", defaults.lookup_max_retries),
            mock_latency_min_ms: parse_or("MOCK_LATENCY_MIN_MS", defaults.mock_latency_min_ms),
            mock_latency_max_ms: parse_or("MOCK_LATENCY_MAX_MS", defaults.mock_latency_max_ms),
            max_tlds_per_search: parse_or("MAX_TLDS_PER_SEARCH", defaults.max_tlds_per_search),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the simulated latency range is inverted
    /// - the lookup timeout does not leave room for the simulated latency
    /// - retry or per-search limits are out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.mock_latency_min_ms > self.mock_latency_max_ms {
            anyhow::bail!(
                "MOCK_LATENCY_MIN_MS ({}) must not exceed MOCK_LATENCY_MAX_MS ({})",
                self.mock_latency_min_ms,
                self.mock_latency_max_ms
            );
        }

        if self.lookup_timeout_ms == 0 {
            anyhow::bail!("LOOKUP_TIMEOUT_MS must be greater than 0");
        }

        if self.lookup_timeout_ms <= self.mock_latency_max_ms {
            anyhow::bail!(
                "LOOKUP_TIMEOUT_MS ({}) must be greater than MOCK_LATENCY_MAX_MS ({})",
                self.lookup_timeout_ms,
                self.mock_latency_max_ms
            );
        }

        if self.lookup_max_retries > 10 {
            anyhow::bail!(
                "LOOKUP_MAX_RETRIES must be at most 10, got {}",
                self.lookup_max_retries
            );
        }

        if self.max_tlds_per_search == 0 || self.max_tlds_per_search > 100 {
            anyhow::bail!(
                "MAX_TLDS_PER_SEARCH must be between 1 and 100, got {}",
                self.max_tlds_per_search
            );
        }

        Ok(())
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn mock_latency(&self) -> LatencyRange {
        LatencyRange::new(self.mock_latency_min_ms, self.mock_latency_max_ms)
    }

    /// Builds the TLD catalog: from `TLD_CATALOG_PATH` if set, built-in otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Arc<TldCatalog>> {
        let catalog = match &self.tld_catalog_path {
            Some(path) => TldCatalog::from_json_file(path)
                .with_context(|| format!("Failed to load TLD catalog from '{path}'"))?,
            None => TldCatalog::default(),
        };

        Ok(Arc::new(catalog))
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Registrar: {}", self.registrar_name);
        match &self.tld_catalog_path {
            Some(path) => tracing::info!("  TLD catalog: {}", path),
            None => tracing::info!("  TLD catalog: built-in"),
        }
        tracing::info!(
            "  Lookup: timeout {} ms, {} retries",
            self.lookup_timeout_ms,
            self.lookup_max_retries
        );
        tracing::info!(
            "  Simulated latency: {}-{} ms",
            self.mock_latency_min_ms,
            self.mock_latency_max_ms
        );
        tracing::info!("  Max TLDs per search: {}", self.max_tlds_per_search);
    }
}

/// Parses an environment variable, falling back to `default` when unset or malformed.
fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is invalid or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
