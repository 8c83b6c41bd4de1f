//! Credential entity <-> model mapper

use chrono::{DateTime, Utc};
use visahub_core::{Credential, OtpChallenge};

use crate::models::CredentialModel;

fn challenge_from(code: Option<String>, expires_at: Option<DateTime<Utc>>) -> Option<OtpChallenge> {
    match (code, expires_at) {
        (Some(code), Some(expires_at)) => Some(OtpChallenge::new(code, expires_at)),
        _ => None,
    }
}

/// Split a challenge back into its column pair for binding
#[must_use]
pub fn challenge_columns(
    challenge: Option<&OtpChallenge>,
) -> (Option<&str>, Option<DateTime<Utc>>) {
    match challenge {
        Some(c) => (Some(c.code.as_str()), Some(c.expires_at)),
        None => (None, None),
    }
}

impl From<CredentialModel> for Credential {
    fn from(model: CredentialModel) -> Self {
        Credential {
            user_id: model.user_id,
            password_hash: model.password_hash,
            previous_hashes: model.previous_hashes,
            verification: challenge_from(model.verification_code, model.verification_expires_at),
            reset: challenge_from(model.reset_code, model.reset_expires_at),
        }
    }
}
