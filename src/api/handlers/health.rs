//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Flight store reachable
/// - **503 Service Unavailable**: Flight store failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "flights": 5,
///   "checks": {
///     "store": { "status": "ok", "message": "5 flights stored" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (flights, store_check) = check_store(&state).await;
    let healthy = flights.is_some();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        flights,
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> (Option<usize>, CheckStatus) {
    match state.flight_service.count_flights().await {
        Ok(count) => (
            Some(count),
            CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{count} flights stored")),
            },
        ),
        Err(e) => (
            None,
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("Store error: {e}")),
            },
        ),
    }
}
