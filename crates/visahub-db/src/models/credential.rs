//! Credential database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the credentials table
///
/// The two one-time-code challenges (verification, reset) are flattened into
/// nullable column pairs; a challenge exists only when both columns are set.
#[derive(Debug, Clone, FromRow)]
pub struct CredentialModel {
    pub user_id: Uuid,
    pub password_hash: String,
    pub previous_hashes: Vec<String>,
    pub verification_code: Option<String>,
    pub verification_expires_at: Option<DateTime<Utc>>,
    pub reset_code: Option<String>,
    pub reset_expires_at: Option<DateTime<Utc>>,
}
