//! Application configuration structs
//!
//! Loads configuration from environment variables, fail-fast on missing
//! required variables. A `.env` file is honored when present.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub hash: HashConfig,
    pub verification: VerificationConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Bearer-token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in days. Long-lived by design: clients hold one token
    /// until it lapses, there is no refresh flow.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
}

/// Argon2id cost parameters
///
/// Defaults follow the OWASP baseline (19 MiB, 2 iterations, 1 lane).
#[derive(Debug, Clone, Deserialize)]
pub struct HashConfig {
    #[serde(default = "default_hash_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_hash_iterations")]
    pub iterations: u32,
    #[serde(default = "default_hash_parallelism")]
    pub parallelism: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_hash_memory_kib(),
            iterations: default_hash_iterations(),
            parallelism: default_hash_parallelism(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Verification-code issuance settings
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationConfig {
    #[serde(default = "default_code_ttl_minutes")]
    pub code_ttl_minutes: i64,
    #[serde(default = "default_code_length")]
    pub code_length: usize,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: default_code_ttl_minutes(),
            code_length: default_code_length(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "visahub".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_token_ttl_days() -> i64 {
    700
}

fn default_hash_memory_kib() -> u32 {
    19456 // 19 MiB
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}

fn default_code_ttl_minutes() -> i64 {
    30
}

fn default_code_length() -> usize {
    5
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                token_ttl_days: env::var("TOKEN_TTL_DAYS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_token_ttl_days),
            },
            hash: HashConfig {
                memory_kib: env::var("HASH_MEMORY_KIB")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_hash_memory_kib),
                iterations: env::var("HASH_ITERATIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_hash_iterations),
                parallelism: env::var("HASH_PARALLELISM")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_hash_parallelism),
            },
            verification: VerificationConfig {
                code_ttl_minutes: env::var("VERIFICATION_CODE_TTL_MINUTES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_code_ttl_minutes),
                code_length: env::var("VERIFICATION_CODE_LENGTH")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_code_length),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
