//! Database models

mod credential;
mod notification;
mod user;

pub use credential::CredentialModel;
pub use notification::NotificationModel;
pub use user::UserModel;
