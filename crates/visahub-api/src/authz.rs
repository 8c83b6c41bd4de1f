//! Route authorization
//!
//! Handlers declare their requirement as an [`AccessPolicy`]; this one
//! function evaluates it. Every denial produces the same uniform 403.

use uuid::Uuid;
use visahub_core::{AccessPolicy, Actor};

use crate::response::ApiError;

/// Evaluate a route's access policy for the authenticated actor
///
/// `target` is the user id named in the request path, if any.
pub fn authorize(policy: AccessPolicy, actor: &Actor, target: Option<Uuid>) -> Result<(), ApiError> {
    if policy.allows(actor, target) {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}
