//! User handlers
//!
//! Endpoints for listing, lookup, profile updates, suspension, and
//! notifications.

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use visahub_core::{AccessPolicy, RoleFilter};
use visahub_service::{NotificationData, SuspendOutcome, UpdateUserRequest, UserData, UserService};

use crate::authz::authorize;
use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Success};
use crate::state::AppState;

/// Query parameters for the user listing
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub user_type: Option<String>,
}

impl ListUsersQuery {
    fn role_filter(&self) -> RoleFilter {
        match self.user_type.as_deref().map(str::to_lowercase).as_deref() {
            Some("customer") => RoleFilter::CustomersOnly,
            Some("staff") => RoleFilter::StaffOnly,
            _ => RoleFilter::All,
        }
    }
}

/// List users, optionally filtered by type
///
/// GET /api/v1/users?user_type=customer|staff (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Success<Vec<UserData>>> {
    authorize(AccessPolicy::AdminOnly, auth.actor(), None)?;

    let service = UserService::new(state.service_context());
    let users = service.list_users(query.role_filter()).await?;
    Ok(Success::ok("Users fetched successfully", users))
}

/// Get the caller's own profile
///
/// GET /api/v1/users/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Success<UserData>> {
    let service = UserService::new(state.service_context());
    let user = service.me(auth.user_id()).await?;
    Ok(Success::ok("User details fetched successfully", user))
}

/// List the caller's notifications
///
/// GET /api/v1/users/me/notifications
pub async fn notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Success<Vec<NotificationData>>> {
    let service = UserService::new(state.service_context());
    let notifications = service.notifications_for(auth.user_id()).await?;
    Ok(Success::ok(
        "Notifications fetched successfully",
        notifications,
    ))
}

/// Get a user by id
///
/// GET /api/v1/users/:user_id (admin or self)
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Success<UserData>> {
    let user_id = path.user_id()?;
    authorize(AccessPolicy::AdminOrSelf, auth.actor(), Some(user_id))?;

    let service = UserService::new(state.service_context());
    let user = service.get_user(user_id).await?;
    Ok(Success::ok("User fetched successfully", user))
}

/// Update a user's profile
///
/// PUT /api/v1/users/:user_id (self only - admins included)
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Success<UserData>> {
    let user_id = path.user_id()?;
    authorize(AccessPolicy::SelfOnly, auth.actor(), Some(user_id))?;

    let service = UserService::new(state.service_context());
    let user = service.update_user(user_id, request).await?;
    Ok(Success::ok("User updated successfully", user))
}

/// Toggle suspension on a user
///
/// PATCH /api/v1/users/:user_id/suspend (admin only)
pub async fn suspend_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Success<UserData>> {
    let user_id = path.user_id()?;
    authorize(AccessPolicy::AdminOnly, auth.actor(), None)?;

    let service = UserService::new(state.service_context());
    let (user, outcome) = service.suspend_toggle(user_id).await?;
    let message = match outcome {
        SuspendOutcome::Suspended => "User suspended successfully",
        SuspendOutcome::Activated => "User is activated successfully",
    };
    Ok(Success::ok(message, user))
}
