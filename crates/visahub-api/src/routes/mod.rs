//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
    Json, Router,
};

use crate::handlers::{auth, health, users};
use crate::response::{Envelope, ErrorSource};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::welcome))
        .nest("/api/v1", api_v1_routes())
        .fallback(not_found)
}

/// Health check routes (exported separately so probes bypass other layers)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(user_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/add-staff", post(auth::add_staff))
        .route("/auth/change-password", patch(auth::change_password))
        .route("/auth/generate-code", post(auth::generate_code))
        .route("/auth/verify-code", post(auth::verify_code))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/me", get(users::me))
        .route("/users/me/notifications", get(users::notifications))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", put(users::update_user))
        .route("/users/:user_id/suspend", patch(users::suspend_user))
}

/// Global 404 fallback, in the same fail envelope as every other error
async fn not_found() -> Response {
    let body = Envelope::<serde_json::Value> {
        status: "fail",
        message: "You have entered a black hole, find your way out!".to_string(),
        data: None,
        error: Some(ErrorSource {
            error_source: "404_NOT_FOUND_ERROR".to_string(),
        }),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
