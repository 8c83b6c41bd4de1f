//! Credential entity - secret material for one user

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A short-lived one-time code (verification or password reset)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpChallenge {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl OtpChallenge {
    #[must_use]
    pub fn new(code: String, expires_at: DateTime<Utc>) -> Self {
        Self { code, expires_at }
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Constant-shape comparison against a submitted code
    #[must_use]
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }
}

/// Credential record, one-to-one with a user
///
/// Only hashes are ever stored here; plaintext never crosses this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub user_id: Uuid,
    pub password_hash: String,
    pub previous_hashes: Vec<String>,
    pub verification: Option<OtpChallenge>,
    pub reset: Option<OtpChallenge>,
}

impl Credential {
    /// Retained previous-password hashes; oldest entries drop off past this
    pub const PASSWORD_HISTORY_LIMIT: usize = 10;

    #[must_use]
    pub fn new(user_id: Uuid, password_hash: String, verification: Option<OtpChallenge>) -> Self {
        Self {
            user_id,
            password_hash,
            previous_hashes: Vec::new(),
            verification,
            reset: None,
        }
    }

    /// Replace the password hash, archiving the current one into history
    ///
    /// History is capped at [`Self::PASSWORD_HISTORY_LIMIT`]; the oldest
    /// entry is dropped when the cap is reached.
    pub fn rotate_password(&mut self, new_hash: String) {
        let old = std::mem::replace(&mut self.password_hash, new_hash);
        self.previous_hashes.push(old);
        if self.previous_hashes.len() > Self::PASSWORD_HISTORY_LIMIT {
            let excess = self.previous_hashes.len() - Self::PASSWORD_HISTORY_LIMIT;
            self.previous_hashes.drain(..excess);
        }
    }

    pub fn set_verification(&mut self, challenge: OtpChallenge) {
        self.verification = Some(challenge);
    }

    pub fn clear_verification(&mut self) {
        self.verification = None;
    }
}
