//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with upstream checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Upstream reachable
/// - **503 Service Unavailable**: Pageviews API unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "pageviews_api": { "status": "ok", "message": "Reachable, 54 countries configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let pageviews_check = check_pageviews_api(&state).await;

    let all_healthy = pageviews_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            pageviews_api: pageviews_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the pageviews API answers.
async fn check_pageviews_api(state: &AppState) -> CheckStatus {
    let countries = state.articles_service.countries().len();

    if state.articles_service.upstream_healthy().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Reachable, {countries} countries configured")),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Pageviews API unreachable".to_string()),
        }
    }
}
