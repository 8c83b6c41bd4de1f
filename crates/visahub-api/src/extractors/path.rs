//! Path parameter extractors
//!
//! Type-safe extraction of user ids from path parameters.

use uuid::Uuid;

use crate::response::ApiError;

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as a Uuid
    pub fn user_id(&self) -> Result<Uuid, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
