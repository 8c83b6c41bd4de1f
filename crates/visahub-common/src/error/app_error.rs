//! Application error types
//!
//! Unified error handling for the entire application. Every variant knows its
//! HTTP status code and the `errorSource` tag the response envelope carries.

use visahub_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors - all collapse to 401 at the HTTP boundary
    #[error("User not found. Please check your credentials")]
    UserLookupFailed,

    #[error("You have been suspended and cant login to this system")]
    AccountSuspended,

    #[error("Account details supplied is incorrect, please check and try again")]
    InvalidCredentials,

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Malformed token")]
    MalformedToken,

    // Authorization - uniform message, never says which rule failed
    #[error("You do not have permission to perform this action")]
    InsufficientPermissions,

    // Domain rule violations surfaced to the client
    #[error("{0}")]
    BadRequest(String),

    // Request shape violations
    #[error("{0}")]
    Validation(String),

    // Missing documents
    #[error("{0}")]
    DocumentMissing(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Infrastructure errors - generic message only, details stay in logs
    #[error("Something went wrong, please try again later")]
    Database(String),

    #[error("Something went wrong, please try again later")]
    Internal(#[source] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            Self::UserLookupFailed
            | Self::AccountSuspended
            | Self::InvalidCredentials
            | Self::MissingAuth
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::MalformedToken => 401,

            // 403 Forbidden
            Self::InsufficientPermissions => 403,

            // 400 Bad Request
            Self::BadRequest(_) => 400,

            // 422 Unprocessable Entity
            Self::Validation(_) => 422,

            // 404 Not Found
            Self::DocumentMissing(_) => 404,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // Map domain errors; duplicates are a client fault here (400, not 409)
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() || e.is_conflict() {
                    400
                } else {
                    500
                }
            }
        }
    }

    /// Get the `errorSource` tag carried in the fail envelope
    #[must_use]
    pub fn error_source(&self) -> &'static str {
        match self.status_code() {
            401 => "UNAUTHORIZED_ERROR",
            403 => "FORBIDDEN_ERROR",
            400 => "BAD_REQUEST_ERROR",
            422 => "VALIDATION_ERROR",
            404 => "DOCUMENT_MISSING_ERROR",
            _ => "SERVER_ERROR",
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create a bad-request error
    #[must_use]
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a missing-document error
    #[must_use]
    pub fn document_missing(msg: impl Into<String>) -> Self {
        Self::DocumentMissing(msg.into())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
