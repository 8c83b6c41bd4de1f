//! Notification entity - user-facing message queued by the platform

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A delivered notification, as read back for a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for sending a notification
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub text: String,
    pub body: String,
}

impl NewNotification {
    #[must_use]
    pub fn new(user_id: Uuid, text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
            body: body.into(),
        }
    }
}
