//! Authentication handlers
//!
//! Endpoints for registration, login, staff provisioning, password change,
//! and the verification-code lifecycle.

use axum::extract::State;
use serde_json::{json, Value};
use visahub_service::{
    AuthService, ChangePasswordRequest, CreateStaffRequest, LoginRequest, LoginResponse,
    RegisterRequest, RegisterResponse, UserData, UserService, VerificationOutcome,
    VerifyCodeRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Success};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Success<RegisterResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Success::created("Registration successful", response))
}

/// Login with an email address or phone number
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Success<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Success::ok("Login successful", response))
}

/// Provision a staff account
///
/// POST /api/v1/auth/add-staff
///
/// Authenticated; a non-admin caller's requested role is silently forced to
/// CUSTOMER rather than rejected, so no policy gate sits in front.
pub async fn add_staff(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateStaffRequest>,
) -> ApiResult<Success<UserData>> {
    let service = UserService::new(state.service_context());
    let created = service.create_staff(auth.actor(), request).await?;
    Ok(Success::created("Registration successful", created))
}

/// Change the caller's own password
///
/// PATCH /api/v1/auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Success<Value>> {
    let service = AuthService::new(state.service_context());
    service.change_password(auth.user_id(), request).await?;
    Ok(Success::accepted("Password changed successfully", json!({})))
}

/// Issue a verification code for the caller
///
/// POST /api/v1/auth/generate-code
pub async fn generate_code(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Success<Value>> {
    let service = AuthService::new(state.service_context());
    let message = match service.generate_code(auth.user_id()).await? {
        VerificationOutcome::AlreadyVerified => "User verified already",
        _ => "SMS sent successfully",
    };
    Ok(Success::ok(message, json!({})))
}

/// Consume a verification code
///
/// POST /api/v1/auth/verify-code
pub async fn verify_code(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<VerifyCodeRequest>,
) -> ApiResult<Success<Value>> {
    let service = AuthService::new(state.service_context());
    let message = match service.verify_code(auth.user_id(), request).await? {
        VerificationOutcome::AlreadyVerified => "User verified already",
        _ => "Account verified successfully",
    };
    Ok(Success::ok(message, json!({})))
}
