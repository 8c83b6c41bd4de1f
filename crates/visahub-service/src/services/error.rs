//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use std::fmt;
use visahub_common::AppError;
use visahub_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// Application error (auth, validation, etc.)
    App(AppError),

    /// Resource not found
    NotFound { resource: &'static str },

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::NotFound { resource } => write!(f, "{resource} not found"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() || e.is_conflict() {
                    400
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::Internal(_) => 500,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource } => {
                AppError::DocumentMissing(format!("{resource} not found"))
            }
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
