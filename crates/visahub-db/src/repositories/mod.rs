//! PostgreSQL repository implementations

mod credential;
mod error;
mod notification;
mod user;

pub use credential::PgCredentialRepository;
pub use notification::PgNotifier;
pub use user::PgUserRepository;
