//! Health check and welcome handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::response::Success;
use crate::state::AppState;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

/// Welcome route
///
/// GET /
pub async fn welcome(State(state): State<AppState>) -> Success<Value> {
    Success::ok(
        format!("Welcome to {} server!!", state.config().app.name),
        json!({}),
    )
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = state.pool().acquire().await.is_ok();

    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            status: if db_healthy { "ready" } else { "degraded" },
            database: db_healthy,
        }),
    )
}
