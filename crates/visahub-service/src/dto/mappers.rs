//! Entity to DTO mappers

use visahub_core::{Notification, User};

use super::responses::{NotificationData, UserData};

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            profile_img: user.profile_img.clone(),
            role: user.role,
            is_admin: user.is_admin,
            status: user.status,
            is_onboarded: user.is_onboarded,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Notification> for NotificationData {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            text: notification.text.clone(),
            body: notification.body.clone(),
            created_at: notification.created_at,
        }
    }
}

impl From<Notification> for NotificationData {
    fn from(notification: Notification) -> Self {
        Self::from(&notification)
    }
}
