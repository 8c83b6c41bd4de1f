//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
    /// Include file and line numbers
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Development configuration with debug logging
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json: false,
            file_line: true,
        }
    }

    /// Production configuration with JSON logging
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
            file_line: false,
        }
    }
}

/// Initialize the tracing subscriber
///
/// Uses `RUST_LOG` for filtering if set, otherwise the configured level.
///
/// # Panics
/// Panics if a subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) {
    try_init_tracing(config).expect("tracing subscriber already initialized");
}

/// Try to initialize tracing, failing gracefully if already installed
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    if config.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_file(config.file_line)
            .with_line_number(config.file_line);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        let fmt_layer = fmt::layer()
            .with_file(config.file_line)
            .with_line_number(config.file_line);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
