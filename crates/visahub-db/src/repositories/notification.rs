//! PostgreSQL implementation of the Notifier collaborator
//!
//! Out-of-band delivery (SMS, push) happens elsewhere; this implementation
//! records each notification so users can read them back.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use visahub_core::{NewNotification, Notification, Notifier, RepoResult};

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL-backed notifier
#[derive(Clone)]
pub struct PgNotifier {
    pool: PgPool,
}

impl PgNotifier {
    /// Create a new PgNotifier
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Notifier for PgNotifier {
    #[instrument(skip(self, notification))]
    async fn notify(&self, notification: &NewNotification) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO notifications (id, user_id, text, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(Uuid::new_v4())
        .bind(notification.user_id)
        .bind(&notification.text)
        .bind(&notification.body)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_for(&self, user_id: Uuid) -> RepoResult<Vec<Notification>> {
        let models = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, user_id, text, body, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Notification::from).collect())
    }
}
