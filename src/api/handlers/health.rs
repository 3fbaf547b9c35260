//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Label used to probe the availability provider.
const PROBE_LABEL: &str = "healthcheck";

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Catalog**: Reports the number of offered extensions
/// 2. **Provider**: Runs one availability lookup
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": { "status": "ok", "message": "9 extensions, 5 popular" },
///     "provider": { "status": "ok", "message": "Answered for healthcheck.com" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state);

    let provider_check = check_provider(&state).await;

    let all_healthy = catalog_check.status == "ok" && provider_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            provider: provider_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports catalog size.
fn check_catalog(state: &AppState) -> CheckStatus {
    let catalog = state.search_service.catalog();
    let popular = catalog.popular_extensions().len();

    if catalog.is_empty() || popular == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Catalog has no popular extensions".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} extensions, {} popular", catalog.len(), popular)),
        }
    }
}

/// Checks that the availability provider answers.
async fn check_provider(state: &AppState) -> CheckStatus {
    let suffix = state
        .search_service
        .catalog()
        .popular_extensions()
        .into_iter()
        .next()
        .unwrap_or_else(|| ".com".to_string());

    match state.search_service.provider().check(PROBE_LABEL, &suffix).await {
        Ok(verdict) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Answered for {}", verdict.full_domain)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Provider error: {}", e)),
        },
    }
}
