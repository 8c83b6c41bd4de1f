//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Secret material
//! (hashes, codes) never appears here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use visahub_core::{UserRole, UserStatus};

// ============================================================================
// User Responses
// ============================================================================

/// Full user profile snapshot, as returned under `user_data`
#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone_number: String,
    pub profile_img: String,
    pub role: UserRole,
    pub is_admin: bool,
    pub status: UserStatus,
    pub is_onboarded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Login response: profile snapshot plus a fresh bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_data: UserData,
    pub token: String,
    /// Human-readable token lifetime, e.g. "700 days"
    pub expires: String,
}

/// Registration response: the created profile plus an immediate session
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_data: UserData,
    pub token: String,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// A notification as read back by its recipient
#[derive(Debug, Clone, Serialize)]
pub struct NotificationData {
    pub id: Uuid,
    pub text: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
