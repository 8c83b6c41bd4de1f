//! Account status lifecycle

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a user account
///
/// New registrations start `Unverified` and move to `Active` once a
/// verification code is confirmed. `Suspended` blocks login entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    IncompleteSetup,
    #[default]
    Unverified,
}

impl UserStatus {
    /// Wire/database representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::IncompleteSetup => "INCOMPLETE_SETUP",
            Self::Unverified => "UNVERIFIED",
        }
    }

    #[must_use]
    pub const fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspended)
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a status from its wire form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user status: {0}")]
pub struct StatusParseError(pub String);

impl FromStr for UserStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "SUSPENDED" => Ok(Self::Suspended),
            "INCOMPLETE_SETUP" => Ok(Self::IncompleteSetup),
            "UNVERIFIED" => Ok(Self::Unverified),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}
