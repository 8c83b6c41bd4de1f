//! Notification entity <-> model mapper

use visahub_core::Notification;

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: model.id,
            user_id: model.user_id,
            text: model.text,
            body: model.body,
            created_at: model.created_at,
        }
    }
}
