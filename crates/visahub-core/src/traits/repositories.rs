//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Credential, NewNotification, Notification, OtpChallenge, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Creation payload for a credential row
///
/// The hash is computed by the caller; plaintext never crosses the
/// repository boundary.
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub password_hash: String,
    pub verification: Option<OtpChallenge>,
}

/// Role-based filter for user listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    /// Only `CUSTOMER` accounts
    CustomersOnly,
    /// Everything except `CUSTOMER`
    StaffOnly,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by login identifier - matches email OR phone number
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>>;

    /// Check if a phone number is already registered
    async fn phone_exists(&self, phone_number: &str) -> RepoResult<bool>;

    /// Create a user together with its credential row, atomically
    async fn create(&self, user: &User, credential: &NewCredential) -> RepoResult<()>;

    /// Update an existing user's profile, role, and status fields
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// List users matching the role filter
    async fn list(&self, filter: RoleFilter) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Credential Repository
// ============================================================================

#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find the credential record for a user
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Credential>>;

    /// Persist hash, history, and challenge fields of an existing credential
    async fn update(&self, credential: &Credential) -> RepoResult<()>;
}

// ============================================================================
// Notifier
// ============================================================================

/// Outbound notification collaborator
///
/// Callers treat `notify` as fire-and-forget: a delivery failure is logged
/// and swallowed, never surfaced to the request.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Queue a notification for a user
    async fn notify(&self, notification: &NewNotification) -> RepoResult<()>;

    /// List notifications previously queued for a user, newest first
    async fn list_for(&self, user_id: Uuid) -> RepoResult<Vec<Notification>>;
}
