//! Password hashing and verification
//!
//! Uses Argon2id with cost parameters taken from process configuration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::HashConfig;
use crate::error::AppError;

/// Password service holding the configured Argon2id instance
#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Create a password service with the given cost parameters
    ///
    /// # Errors
    /// Returns a configuration error if the parameters are out of range
    pub fn new(config: &HashConfig) -> Result<Self, AppError> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| AppError::Config(format!("Invalid hash parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh OS-random salt
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
    }

    /// Verify a password against a stored digest
    ///
    /// A malformed digest verifies as `false`; this method never errors.
    #[must_use]
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(digest) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl std::fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordService").finish_non_exhaustive()
    }
}
