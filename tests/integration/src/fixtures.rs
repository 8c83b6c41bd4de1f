//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Phone numbers mix in
//! the process id so repeated runs against a persistent database never
//! collide.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    u64::from(std::process::id()) * 10_000 + counter
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("test{suffix}@example.com"),
            phone_number: format!("0{:012}", suffix % 1_000_000_000_000),
            password: "password1".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            identifier: reg.phone_number.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Password change request
#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// The uniform response envelope
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
    pub error: Option<ErrorTag>,
}

/// Machine-readable error tag in fail envelopes
#[derive(Debug, Deserialize)]
pub struct ErrorTag {
    #[serde(rename = "errorSource")]
    pub error_source: String,
}

/// Auth payload carried under `data` for login/registration
#[derive(Debug, Deserialize)]
pub struct AuthData {
    pub user_data: UserPayload,
    pub token: String,
    pub expires: Option<String>,
}

/// User payload as serialized by the API
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub role: String,
    pub is_admin: bool,
    pub status: String,
}
