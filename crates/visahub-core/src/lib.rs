//! # visahub-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Credential, NewNotification, Notification, OtpChallenge, User};
pub use error::DomainError;
pub use traits::{
    CredentialRepository, NewCredential, Notifier, RepoResult, RoleFilter, UserRepository,
};
pub use value_objects::{AccessPolicy, Actor, UserRole, UserStatus};
