//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
