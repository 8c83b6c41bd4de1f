//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.
//! Shape violations surface as 422 with the first failing rule's message.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;
use visahub_common::AppError;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// The inner type must implement both `Deserialize` and `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Undeserializable bodies are shape violations too
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::App(AppError::validation(e.body_text())))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
