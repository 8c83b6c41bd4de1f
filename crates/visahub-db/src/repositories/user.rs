//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use visahub_core::{DomainError, NewCredential, RepoResult, RoleFilter, User, UserRepository};

use crate::mappers::challenge_columns;
use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

const USER_COLUMNS: &str = "id, first_name, last_name, email, phone_number, profile_img, \
                            role, is_admin, status, is_onboarded, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>> {
        // Email is stored lowercased; phone numbers match verbatim
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = LOWER($1) OR phone_number = $1"
        ))
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn phone_exists(&self, phone_number: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE phone_number = $1)",
        )
        .bind(phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, credential))]
    async fn create(&self, user: &User, credential: &NewCredential) -> RepoResult<()> {
        // User and credential land in one transaction: no orphaned identities
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO users (id, first_name, last_name, email, phone_number, profile_img,
                               role, is_admin, status, is_onboarded, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.profile_img)
        .bind(user.role.as_str())
        .bind(user.is_admin)
        .bind(user.status.as_str())
        .bind(user.is_onboarded)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PhoneAlreadyRegistered))?;

        let (code, expires_at) = challenge_columns(credential.verification.as_ref());
        sqlx::query(
            r"
            INSERT INTO credentials (user_id, password_hash, verification_code, verification_expires_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(user.id)
        .bind(&credential.password_hash)
        .bind(code)
        .bind(expires_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
                profile_img = $6, role = $7, is_admin = $8, status = $9,
                is_onboarded = $10, updated_at = $11
            WHERE id = $1
            ",
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.profile_img)
        .bind(user.role.as_str())
        .bind(user.is_admin)
        .bind(user.status.as_str())
        .bind(user.is_onboarded)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: RoleFilter) -> RepoResult<Vec<User>> {
        let predicate = match filter {
            RoleFilter::All => "",
            RoleFilter::CustomersOnly => "WHERE role = 'CUSTOMER'",
            RoleFilter::StaffOnly => "WHERE role <> 'CUSTOMER'",
        };

        let models = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users {predicate} ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(User::try_from).collect()
    }
}
