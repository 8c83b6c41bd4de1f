//! User entity - identity and profile record

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{UserRole, UserStatus};

/// Placeholder avatar used when no profile image was uploaded
pub const DEFAULT_PROFILE_IMG: &str =
    "https://moonvillageassociation.org/wp-content/uploads/2018/06/default-profile-picture1.jpg";

/// User entity representing one account on the platform
///
/// Every user has a phone number; email is optional and stored lowercased.
/// Accounts are never hard-deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub profile_img: String,
    pub role: UserRole,
    pub is_admin: bool,
    pub status: UserStatus,
    pub is_onboarded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user as self-registration does: `Unverified`, not yet onboarded
    pub fn register(
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone_number: String,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email: email.map(|e| e.trim().to_lowercase()),
            phone_number,
            profile_img: DEFAULT_PROFILE_IMG.to_string(),
            role,
            is_admin: false,
            status: UserStatus::Unverified,
            is_onboarded: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the account verified
    pub fn activate(&mut self) {
        self.status = UserStatus::Active;
        self.updated_at = Utc::now();
    }

    /// Toggle suspension: a suspended account becomes `Active`, anything else
    /// becomes `Suspended`
    ///
    /// Returns `true` when the user ends up suspended.
    pub fn suspend_toggle(&mut self) -> bool {
        self.status = if self.status.is_suspended() {
            UserStatus::Active
        } else {
            UserStatus::Suspended
        };
        self.updated_at = Utc::now();
        self.status.is_suspended()
    }

    /// Full display name
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}
