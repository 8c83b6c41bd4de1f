//! User entity <-> model mapper

use visahub_core::{DomainError, User, UserRole, UserStatus};

use crate::models::UserModel;

/// Convert UserModel to User entity, rejecting unknown role/status text
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: UserRole = model
            .role
            .parse()
            .map_err(|e: visahub_core::value_objects::RoleParseError| {
                DomainError::DatabaseError(e.to_string())
            })?;
        let status: UserStatus = model
            .status
            .parse()
            .map_err(|e: visahub_core::value_objects::StatusParseError| {
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(User {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone_number: model.phone_number,
            profile_img: model.profile_img,
            role,
            is_admin: model.is_admin,
            status,
            is_onboarded: model.is_onboarded,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
