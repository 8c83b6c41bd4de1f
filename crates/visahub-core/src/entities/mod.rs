//! Domain entities

mod credential;
mod notification;
mod user;

pub use credential::{Credential, OtpChallenge};
pub use notification::{NewNotification, Notification};
pub use user::User;
