//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use visahub_core::{Actor, User, UserRole};

use crate::error::AppError;

/// JWT claims structure
///
/// A snapshot of the user's identity at issuance time. The server is
/// stateless with respect to issued tokens: validity is a function of
/// signature and expiry only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Phone number at issuance time
    pub phone_number: String,
    /// Role at issuance time
    pub role: UserRole,
    /// Admin flag at issuance time
    pub is_admin: bool,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID as a Uuid
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid UUID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.sub.parse().map_err(|_| AppError::MalformedToken)
    }

    /// Build the request actor these claims describe
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid UUID
    pub fn actor(&self) -> Result<Actor, AppError> {
        Ok(Actor::new(self.user_id()?, self.role, self.is_admin))
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// A freshly issued token with its human-readable expiry label
#[derive(Debug, Clone, Serialize)]
pub struct SignedToken {
    pub token: String,
    pub expires: String,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_days: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and lifetime in days
    #[must_use]
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_days,
        }
    }

    /// Human-readable lifetime label returned alongside issued tokens
    #[must_use]
    pub fn expiry_label(&self) -> String {
        format!("{} days", self.ttl_days)
    }

    /// Issue a signed token over a user snapshot
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, user: &User) -> Result<SignedToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            phone_number: user.phone_number.clone(),
            role: user.role,
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: (now + Duration::days(self.ttl_days)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(SignedToken {
            token,
            expires: self.expiry_label(),
        })
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// `TokenExpired` past its ttl, `InvalidToken` on a bad signature,
    /// `MalformedToken` for anything that is not a well-formed JWT.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::InvalidToken,
                _ => AppError::MalformedToken,
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("ttl_days", &self.ttl_days)
            .finish_non_exhaustive()
    }
}
