//! Authentication service
//!
//! Handles login, password change, and the verification-code lifecycle.

use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use visahub_common::AppError;
use visahub_core::{NewNotification, OtpChallenge};

use crate::dto::{ChangePasswordRequest, LoginRequest, LoginResponse, UserData, VerifyCodeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::verification::random_numeric_code;

/// Result of a verification-code operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The account was already active; nothing was done
    AlreadyVerified,
    /// A fresh code was issued and queued for delivery
    CodeSent,
    /// The submitted code matched and the account is now active
    Verified,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with an email address or phone number
    ///
    /// Suspension is checked before the password so a suspended account's
    /// login attempt never reveals whether the password was correct.
    #[instrument(skip(self, request), fields(identifier = %request.identifier))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_identifier(&request.identifier)
            .await?
            .ok_or_else(|| {
                warn!(identifier = %request.identifier, "Login failed: no matching user");
                ServiceError::App(AppError::UserLookupFailed)
            })?;

        if user.status.is_suspended() {
            warn!(user_id = %user.id, "Suspended account attempted login");
            return Err(ServiceError::App(AppError::AccountSuspended));
        }

        let credential = self
            .ctx
            .credential_repo()
            .find_by_user(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no credential record");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !self
            .ctx
            .password_service()
            .verify(&request.password, &credential.password_hash)
        {
            warn!(user_id = %user.id, "Login failed: password mismatch");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let signed = self
            .ctx
            .jwt_service()
            .issue(&user)
            .map_err(ServiceError::App)?;

        info!(user_id = %user.id, "User signed in successfully");

        Ok(LoginResponse {
            user_data: UserData::from(&user),
            token: signed.token,
            expires: signed.expires,
        })
    }

    /// Change the authenticated caller's password
    ///
    /// The identity comes from the session only, never from the request body.
    /// The same-password rejection runs before the old password is checked,
    /// so an identical old/new pair always reports "same password" even when
    /// the old password is wrong.
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        if request.old_password == request.new_password {
            return Err(ServiceError::App(AppError::bad_request(
                "Cannot change password to old password",
            )));
        }

        let mut credential = self
            .ctx
            .credential_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        if !self
            .ctx
            .password_service()
            .verify(&request.old_password, &credential.password_hash)
        {
            return Err(ServiceError::App(AppError::bad_request(
                "Incorrect old password. Unable to change password",
            )));
        }

        let new_hash = self
            .ctx
            .password_service()
            .hash(&request.new_password)
            .map_err(ServiceError::App)?;

        credential.rotate_password(new_hash);
        self.ctx.credential_repo().update(&credential).await?;

        info!(user_id = %user_id, "Password changed successfully");
        Ok(())
    }

    /// Issue a fresh verification code for the authenticated caller
    ///
    /// A no-op for accounts that are already active.
    #[instrument(skip(self))]
    pub async fn generate_code(&self, user_id: Uuid) -> ServiceResult<VerificationOutcome> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        if user.status.is_active() {
            return Ok(VerificationOutcome::AlreadyVerified);
        }

        let mut credential = self
            .ctx
            .credential_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        let settings = self.ctx.verification();
        let code = random_numeric_code(settings.code_length);
        let expires_at = Utc::now() + Duration::minutes(settings.code_ttl_minutes);
        credential.set_verification(OtpChallenge::new(code.clone(), expires_at));

        self.ctx.credential_repo().update(&credential).await?;

        self.dispatch(NewNotification::new(
            user.id,
            "Your verification code",
            format!(
                "Use code {code} to verify your account. It expires in {} minutes.",
                settings.code_ttl_minutes
            ),
        ))
        .await;

        info!(user_id = %user.id, "Verification code issued");
        Ok(VerificationOutcome::CodeSent)
    }

    /// Consume a verification code, activating the account on success
    ///
    /// A no-op for accounts that are already active; a second submission of
    /// a consumed code therefore succeeds without touching anything.
    #[instrument(skip(self, request))]
    pub async fn verify_code(
        &self,
        user_id: Uuid,
        request: VerifyCodeRequest,
    ) -> ServiceResult<VerificationOutcome> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        if user.status.is_active() {
            return Ok(VerificationOutcome::AlreadyVerified);
        }

        let mut credential = self
            .ctx
            .credential_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        let challenge = credential
            .verification
            .as_ref()
            .filter(|c| !c.is_expired(Utc::now()))
            .ok_or_else(|| {
                ServiceError::App(AppError::bad_request(
                    "Verification code has expired, please request for another",
                ))
            })?;

        if !challenge.matches(&request.token) {
            return Err(ServiceError::App(AppError::bad_request(
                "Incorrect verification code",
            )));
        }

        user.activate();
        credential.clear_verification();

        self.ctx.user_repo().update(&user).await?;
        self.ctx.credential_repo().update(&credential).await?;

        self.dispatch(NewNotification::new(
            user.id,
            "You account has been verified successfully",
            "You account has been verified successfully. You now have full access to the platform",
        ))
        .await;

        info!(user_id = %user.id, "Account verified successfully");
        Ok(VerificationOutcome::Verified)
    }

    /// Fire-and-forget notification dispatch; delivery failures are logged
    /// and swallowed
    async fn dispatch(&self, notification: NewNotification) {
        if let Err(e) = self.ctx.notifier().notify(&notification).await {
            warn!(user_id = %notification.user_id, error = %e, "Notification delivery failed");
        }
    }
}
