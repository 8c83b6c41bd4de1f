//! Response envelope and error handling for API endpoints
//!
//! Every response body, success or failure, is wrapped in the same envelope:
//! `{ status: "success" | "fail", message, data?, error?: { errorSource } }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;
use visahub_common::AppError;
use visahub_service::ServiceError;

/// The uniform response envelope
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorSource>,
}

/// Machine-readable error tag inside the fail envelope
#[derive(Debug, Serialize)]
pub struct ErrorSource {
    #[serde(rename = "errorSource")]
    pub error_source: String,
}

/// Successful response: a status code, a message, and the payload
pub struct Success<T> {
    status: StatusCode,
    message: String,
    data: T,
}

impl<T> Success<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }

    /// 200 OK
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, data)
    }

    /// 201 Created
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::CREATED, message, data)
    }

    /// 202 Accepted
    pub fn accepted(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::ACCEPTED, message, data)
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        let body = Envelope {
            status: "success",
            message: self.message,
            data: Some(self.data),
            error: None,
        };
        (self.status, Json(body)).into_response()
    }
}

/// API error type for consistent fail envelopes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    /// Uniform authorization denial; never says which rule failed
    #[error("You do not have permission to perform this action")]
    Forbidden,
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    /// Get the `errorSource` tag for the fail envelope
    #[must_use]
    pub fn error_source(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_source(),
            Self::Service(_) | Self::InvalidPath(_) => match self.status_code().as_u16() {
                401 => "UNAUTHORIZED_ERROR",
                403 => "FORBIDDEN_ERROR",
                400 => "BAD_REQUEST_ERROR",
                404 => "DOCUMENT_MISSING_ERROR",
                _ => "SERVER_ERROR",
            },
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Forbidden => "FORBIDDEN_ERROR",
        }
    }

    /// Create an invalid-path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Client-facing message for this error
    ///
    /// Validation failures surface their first rule message; server errors
    /// stay generic no matter what the underlying source says.
    fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            return "Something went wrong, please try again later".to_string();
        }
        if let Self::Validation(errors) = self {
            if let Some(first) = errors
                .field_errors()
                .into_iter()
                .flat_map(|(_, errs)| errs.iter())
                .find_map(|e| e.message.as_ref())
            {
                return first.to_string();
            }
            return "Invalid request body".to_string();
        }
        self.to_string()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_source = self.error_source().to_string();

        // Server errors are logged with their source; the client sees a
        // generic message only
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let body = Envelope::<serde_json::Value> {
            status: "fail",
            message: self.client_message(),
            data: None,
            error: Some(ErrorSource {
                error_source,
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
