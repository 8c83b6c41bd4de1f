//! Declarative per-route access policy
//!
//! Each route states its requirement as a policy value; one evaluator decides.
//! Callers map a denial to a uniform "forbidden" error so the response never
//! reveals which rule was violated.

use uuid::Uuid;

use super::role::UserRole;

/// Identity attached to an authenticated request
///
/// Carries exactly the fields the bearer-token claims provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: UserRole,
    pub is_admin: bool,
}

impl Actor {
    #[must_use]
    pub fn new(user_id: Uuid, role: UserRole, is_admin: bool) -> Self {
        Self {
            user_id,
            role,
            is_admin,
        }
    }
}

/// Authorization requirement for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Caller must have `is_admin == true`
    AdminOnly,
    /// The path's target user must be the caller, admins included
    SelfOnly,
    /// Either an admin or the target user
    AdminOrSelf,
    /// Caller's role must be in the allowed set
    RoleIn(&'static [UserRole]),
}

impl AccessPolicy {
    /// Evaluate this policy for an actor against an optional target user id
    ///
    /// `target` is the user id named in the request path, if the route has one.
    /// Self-referential policies deny when the route carries no target.
    #[must_use]
    pub fn allows(&self, actor: &Actor, target: Option<Uuid>) -> bool {
        match self {
            Self::AdminOnly => actor.is_admin,
            Self::SelfOnly => target == Some(actor.user_id),
            Self::AdminOrSelf => actor.is_admin || target == Some(actor.user_id),
            Self::RoleIn(allowed) => allowed.contains(&actor.role),
        }
    }
}
