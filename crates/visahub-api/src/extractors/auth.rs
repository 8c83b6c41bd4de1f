//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use visahub_common::AppError;
use visahub_core::Actor;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the bearer token
///
/// Wraps the [`Actor`] the token's claims describe. Absent headers and every
/// flavor of verification failure collapse to one uniform 401 here.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Actor);

impl AuthUser {
    /// The actor's user id
    #[must_use]
    pub fn user_id(&self) -> uuid::Uuid {
        self.0.user_id
    }

    /// The actor behind the request
    #[must_use]
    pub fn actor(&self) -> &Actor {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        // Get the app state to access the JWT service
        let app_state = AppState::from_ref(state);

        // Expired, tampered, and malformed tokens are indistinguishable to
        // the client
        let claims = app_state
            .jwt_service()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Bearer token rejected");
                ApiError::App(AppError::InvalidToken)
            })?;

        let actor = claims.actor().map_err(|e| {
            tracing::warn!(error = %e, "Invalid subject in token");
            ApiError::App(AppError::InvalidToken)
        })?;

        Ok(AuthUser(actor))
    }
}
