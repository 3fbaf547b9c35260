//! HTTP server initialization and runtime setup.
//!
//! Builds the catalog and availability provider from configuration, wires
//! the search service and runs the Axum server until a shutdown signal.

use crate::application::services::SearchService;
use crate::config::Config;
use crate::domain::catalog::TldCatalog;
use crate::domain::providers::AvailabilityProvider;
use crate::infrastructure::registry::{MockRegistry, ResilientProvider};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the search service described by `config`.
///
/// The provider chain is `ResilientProvider` (timeout, retries) around
/// `MockRegistry`.
pub fn build_search_service(config: &Config, catalog: Arc<TldCatalog>) -> SearchService {
    let registry: Arc<dyn AvailabilityProvider> = Arc::new(MockRegistry::new(
        catalog.clone(),
        config.registrar_name.clone(),
        config.mock_latency(),
    ));

    let provider: Arc<dyn AvailabilityProvider> = Arc::new(ResilientProvider::new(
        registry,
        config.lookup_timeout(),
        config.lookup_max_retries,
    ));

    SearchService::new(provider, catalog, config.max_tlds_per_search)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - TLD catalog (built-in or from `TLD_CATALOG_PATH`)
/// - Availability provider chain
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The catalog file cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    tracing::info!(
        extensions = catalog.len(),
        popular = ?catalog.popular_extensions(),
        "TLD catalog loaded"
    );

    let search_service = Arc::new(build_search_service(&config, catalog));
    let state = AppState::new(search_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
