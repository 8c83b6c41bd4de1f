//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use visahub_common::{AppConfig, AppError, JwtService, PasswordService};
use visahub_db::{create_pool, PgCredentialRepository, PgNotifier, PgUserRepository};
use visahub_service::ServiceContextBuilder;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let is_production = state.config().app.env.is_production();
    let cors = state.config().cors.clone();

    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &cors, is_production);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// # Errors
/// Returns an error if the database is unreachable or configuration is invalid
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = visahub_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply schema migrations
    visahub_db::run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Schema migrations applied");

    // Create auth services
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.token_ttl_days,
    ));
    let password_service = Arc::new(PasswordService::new(&config.hash)?);

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let credential_repo = Arc::new(PgCredentialRepository::new(pool.clone()));
    let notifier = Arc::new(PgNotifier::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .credential_repo(credential_repo)
        .notifier(notifier)
        .jwt_service(jwt_service)
        .password_service(password_service)
        .verification(config.verification.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error if startup fails at any stage
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
