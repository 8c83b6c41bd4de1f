//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // Not found
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Credentials not found for user: {0}")]
    CredentialNotFound(Uuid),

    // Conflict
    #[error("Phone number already registered")]
    PhoneAlreadyRegistered,

    // Validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    // Infrastructure (wrapped)
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CredentialNotFound(_) => "UNKNOWN_CREDENTIAL",
            Self::PhoneAlreadyRegistered => "PHONE_ALREADY_REGISTERED",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::CredentialNotFound(_))
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::PhoneAlreadyRegistered)
    }
}
