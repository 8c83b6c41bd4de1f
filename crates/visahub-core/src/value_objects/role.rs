//! User role - coarse-grained job function of an account

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role assigned to a user account
///
/// Everything except `Customer` counts as staff. Roles are stored as their
/// SCREAMING_SNAKE_CASE wire form in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Supervisor,
    SuperAdmin,
    VisaOfficer,
    #[default]
    Customer,
    Accountant,
}

impl UserRole {
    /// All roles, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Supervisor,
        Self::SuperAdmin,
        Self::VisaOfficer,
        Self::Customer,
        Self::Accountant,
    ];

    /// Wire/database representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Supervisor => "SUPERVISOR",
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::VisaOfficer => "VISA_OFFICER",
            Self::Customer => "CUSTOMER",
            Self::Accountant => "ACCOUNTANT",
        }
    }

    /// Check if this role is a staff role (anything but `Customer`)
    #[must_use]
    pub const fn is_staff(&self) -> bool {
        !matches!(self, Self::Customer)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a role from its wire form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for UserRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPERVISOR" => Ok(Self::Supervisor),
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "VISA_OFFICER" => Ok(Self::VisaOfficer),
            "CUSTOMER" => Ok(Self::Customer),
            "ACCOUNTANT" => Ok(Self::Accountant),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}
