//! Health check endpoints

use axum::{Router, extract::State, routing::get};
use axum_helpers::{AppError, JsonResponse, errors::handlers::method_not_allowed};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            service: "produtos-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
pub async fn health() -> JsonResponse<HealthResponse> {
    JsonResponse::ok(HealthResponse::new("healthy"))
}

/// Readiness probe: fails while draining or when PostgreSQL is unreachable
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Ready to serve traffic", body = HealthResponse),
        (status = 503, response = axum_helpers::errors::responses::ServiceUnavailableResponse)
    )
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<JsonResponse<HealthResponse>, AppError> {
    if state.shutdown.is_shutting_down() {
        return Err(AppError::ServiceUnavailable("shutting down".to_string()));
    }

    database::postgres::check_health(&state.db)
        .await
        .map_err(|e| AppError::ServiceUnavailable(e.to_string()))?;

    Ok(JsonResponse::ok(HealthResponse::new("ready")))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}
