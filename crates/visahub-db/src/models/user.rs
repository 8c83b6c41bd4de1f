//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the users table
///
/// Role and status are stored as their wire-form text; mappers decode them
/// into the domain enums and reject unknown values.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub profile_img: String,
    pub role: String,
    pub is_admin: bool,
    pub status: String,
    pub is_onboarded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
