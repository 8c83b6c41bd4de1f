//! User service
//!
//! Registration, staff provisioning, profile reads and updates, listing,
//! and suspension.

use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use visahub_common::AppError;
use visahub_core::{
    Actor, NewCredential, NewNotification, OtpChallenge, RoleFilter, User, UserRole,
};

use crate::dto::{
    CreateStaffRequest, NotificationData, RegisterRequest, RegisterResponse, UpdateUserRequest,
    UserData,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::verification::random_numeric_code;

/// Result of a suspension toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendOutcome {
    Suspended,
    Activated,
}

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    ///
    /// Creates the user (status UNVERIFIED) and its credential with a
    /// verification challenge pre-set, in one transaction, then issues a
    /// session immediately - verification is enforced separately where
    /// required, not at login.
    #[instrument(skip(self, request), fields(phone_number = %request.phone_number))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        if self
            .ctx
            .user_repo()
            .phone_exists(&request.phone_number)
            .await?
        {
            return Err(ServiceError::App(AppError::bad_request(
                "User already exists",
            )));
        }

        let user = User::register(
            request.first_name,
            request.last_name,
            request.email,
            request.phone_number,
            request.role,
        );

        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(ServiceError::App)?;

        let settings = self.ctx.verification();
        let challenge = OtpChallenge::new(
            random_numeric_code(settings.code_length),
            Utc::now() + Duration::minutes(settings.code_ttl_minutes),
        );

        self.ctx
            .user_repo()
            .create(
                &user,
                &NewCredential {
                    password_hash,
                    verification: Some(challenge),
                },
            )
            .await?;

        self.dispatch(NewNotification::new(
            user.id,
            "You are not verified yet",
            "Please verify your account",
        ))
        .await;

        let signed = self
            .ctx
            .jwt_service()
            .issue(&user)
            .map_err(ServiceError::App)?;

        info!(user_id = %user.id, phone_number = %user.phone_number, "User registered successfully");

        Ok(RegisterResponse {
            user_data: UserData::from(&user),
            token: signed.token,
        })
    }

    /// Provision a staff account on behalf of an authenticated caller
    ///
    /// Non-admin callers get the requested role silently downgraded to
    /// CUSTOMER rather than a rejection. No verification challenge is set.
    #[instrument(skip(self, request), fields(phone_number = %request.phone_number))]
    pub async fn create_staff(
        &self,
        actor: &Actor,
        request: CreateStaffRequest,
    ) -> ServiceResult<UserData> {
        let role = if actor.is_admin {
            request.role
        } else {
            UserRole::Customer
        };

        if self
            .ctx
            .user_repo()
            .phone_exists(&request.phone_number)
            .await?
        {
            return Err(ServiceError::App(AppError::bad_request(
                "User already exists",
            )));
        }

        let user = User::register(
            request.first_name,
            request.last_name,
            request.email,
            request.phone_number,
            role,
        );

        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(ServiceError::App)?;

        self.ctx
            .user_repo()
            .create(
                &user,
                &NewCredential {
                    password_hash,
                    verification: None,
                },
            )
            .await?;

        info!(user_id = %user.id, role = %user.role, "Staff account created");
        Ok(UserData::from(&user))
    }

    /// List users, optionally restricted to customers or staff
    #[instrument(skip(self))]
    pub async fn list_users(&self, filter: RoleFilter) -> ServiceResult<Vec<UserData>> {
        let users = self.ctx.user_repo().list(filter).await?;
        Ok(users.iter().map(UserData::from).collect())
    }

    /// Get the authenticated caller's own profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Uuid) -> ServiceResult<UserData> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        Ok(UserData::from(&user))
    }

    /// Get a user by id
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Uuid) -> ServiceResult<UserData> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        Ok(UserData::from(&user))
    }

    /// Apply a partial profile update
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserData> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        if let Some(first_name) = request.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            user.last_name = last_name;
        }
        if let Some(phone_number) = request.phone_number {
            user.phone_number = phone_number;
        }
        if let Some(profile_img) = request.profile_img {
            user.profile_img = profile_img;
        }
        if let Some(is_onboarded) = request.is_onboarded {
            user.is_onboarded = is_onboarded;
        }
        user.updated_at = Utc::now();

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "User updated successfully");
        Ok(UserData::from(&user))
    }

    /// Toggle suspension on a user
    ///
    /// A suspended account comes back as ACTIVE regardless of what it was
    /// before suspension.
    #[instrument(skip(self))]
    pub async fn suspend_toggle(&self, user_id: Uuid) -> ServiceResult<(UserData, SuspendOutcome)> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        let outcome = if user.suspend_toggle() {
            SuspendOutcome::Suspended
        } else {
            SuspendOutcome::Activated
        };

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, suspended = matches!(outcome, SuspendOutcome::Suspended), "Suspension toggled");
        Ok((UserData::from(&user), outcome))
    }

    /// List the caller's notifications, newest first
    #[instrument(skip(self))]
    pub async fn notifications_for(&self, user_id: Uuid) -> ServiceResult<Vec<NotificationData>> {
        let notifications = self.ctx.notifier().list_for(user_id).await?;
        Ok(notifications.iter().map(NotificationData::from).collect())
    }

    /// Fire-and-forget notification dispatch; delivery failures are logged
    /// and swallowed
    async fn dispatch(&self, notification: NewNotification) {
        if let Err(e) = self.ctx.notifier().notify(&notification).await {
            warn!(user_id = %notification.user_id, error = %e, "Notification delivery failed");
        }
    }
}
