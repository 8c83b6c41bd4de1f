//! PostgreSQL implementation of CredentialRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use visahub_core::{Credential, CredentialRepository, RepoResult};

use crate::mappers::challenge_columns;
use crate::models::CredentialModel;

use super::error::{credential_not_found, map_db_error};

/// PostgreSQL implementation of CredentialRepository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    /// Create a new PgCredentialRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Credential>> {
        let result = sqlx::query_as::<_, CredentialModel>(
            r"
            SELECT user_id, password_hash, previous_hashes,
                   verification_code, verification_expires_at,
                   reset_code, reset_expires_at
            FROM credentials
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Credential::from))
    }

    #[instrument(skip(self, credential))]
    async fn update(&self, credential: &Credential) -> RepoResult<()> {
        let (verification_code, verification_expires_at) =
            challenge_columns(credential.verification.as_ref());
        let (reset_code, reset_expires_at) = challenge_columns(credential.reset.as_ref());

        let result = sqlx::query(
            r"
            UPDATE credentials
            SET password_hash = $2, previous_hashes = $3,
                verification_code = $4, verification_expires_at = $5,
                reset_code = $6, reset_expires_at = $7
            WHERE user_id = $1
            ",
        )
        .bind(credential.user_id)
        .bind(&credential.password_hash)
        .bind(&credential.previous_hashes)
        .bind(verification_code)
        .bind(verification_expires_at)
        .bind(reset_code)
        .bind(reset_expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(credential_not_found(credential.user_id));
        }

        Ok(())
    }
}
