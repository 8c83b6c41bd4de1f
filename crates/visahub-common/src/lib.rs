//! # visahub-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService, PasswordService, SignedToken};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, HashConfig,
    JwtConfig, ServerConfig, VerificationConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
