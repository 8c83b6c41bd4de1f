//! # visahub-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! Provides:
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgCredentialRepository, PgNotifier, PgUserRepository};

/// Apply embedded schema migrations
///
/// # Errors
/// Returns an error if a migration fails to apply
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
