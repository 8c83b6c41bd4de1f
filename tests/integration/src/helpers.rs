//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and asserting on envelope responses.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use visahub_api::{create_app, create_app_state};
use visahub_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, HashConfig, JwtConfig,
    ServerConfig, VerificationConfig,
};

/// Check whether the environment provides what integration tests need
///
/// Tests call this first and return early when the answer is no, so the
/// suite passes without a database.
pub fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();
    let ready = std::env::var("DATABASE_URL").is_ok() && std::env::var("JWT_SECRET").is_ok();
    if !ready {
        eprintln!("skipping integration test: DATABASE_URL / JWT_SECRET not set");
    }
    ready
}

/// Build a test configuration from the environment
///
/// Hash parameters are deliberately cheap to keep the suite fast.
pub fn test_config() -> Result<AppConfig> {
    Ok(AppConfig {
        app: AppSettings {
            name: "visahub-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: std::env::var("DATABASE_URL")?,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            token_ttl_days: 700,
        },
        hash: HashConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
        verification: VerificationConfig::default(),
        cors: CorsConfig::default(),
    })
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }
}

/// Assert a response status, surfacing the body on mismatch
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("expected {expected}, got {status}: {body}");
    }
    Ok(())
}

/// Assert a response status and deserialize its JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if status != expected {
        anyhow::bail!("expected {expected}, got {status}: {body}");
    }
    Ok(serde_json::from_str(&body)?)
}
