//! visahub API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p visahub-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use tracing::{error, info};
use visahub_common::{try_init_tracing, AppConfig, TracingConfig};

#[tokio::main]
async fn main() {
    // Run the server; startup failures are fatal
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first so tracing format follows the environment
    let config = AppConfig::from_env()?;

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Starting {} API server",
        config.app.name
    );

    visahub_api::run(config).await?;

    Ok(())
}
