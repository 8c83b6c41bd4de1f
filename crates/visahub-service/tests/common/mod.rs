//! Shared fakes for service-level tests
//!
//! In-memory repository implementations backed by one shared store, so the
//! services run against real trait objects without a database.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use visahub_common::{HashConfig, JwtService, PasswordService, VerificationConfig};
use visahub_core::{
    Credential, CredentialRepository, DomainError, NewCredential, NewNotification, Notification,
    Notifier, OtpChallenge, RepoResult, RoleFilter, User, UserRepository, UserRole, UserStatus,
};
use visahub_service::{ServiceContext, ServiceContextBuilder};

pub const TEST_SECRET: &str = "test-secret-key-that-is-long-enough";

/// Shared in-memory store behind all fakes
#[derive(Default)]
pub struct TestBackend {
    pub users: Mutex<HashMap<Uuid, User>>,
    pub credentials: Mutex<HashMap<Uuid, Credential>>,
    pub notifications: Mutex<Vec<Notification>>,
    /// When set, `notify` fails - for exercising fire-and-forget swallowing
    pub fail_notify: AtomicBool,
}

#[derive(Clone)]
pub struct TestUserRepo(pub Arc<TestBackend>);

#[derive(Clone)]
pub struct TestCredentialRepo(pub Arc<TestBackend>);

#[derive(Clone)]
pub struct TestNotifier(pub Arc<TestBackend>);

#[async_trait]
impl UserRepository for TestUserRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.0.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>> {
        let lowered = identifier.to_lowercase();
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_deref() == Some(lowered.as_str()) || u.phone_number == identifier)
            .cloned())
    }

    async fn phone_exists(&self, phone_number: &str) -> RepoResult<bool> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.phone_number == phone_number))
    }

    async fn create(&self, user: &User, credential: &NewCredential) -> RepoResult<()> {
        let mut users = self.0.users.lock().unwrap();
        if users.values().any(|u| u.phone_number == user.phone_number) {
            return Err(DomainError::PhoneAlreadyRegistered);
        }
        users.insert(user.id, user.clone());

        let cred = Credential::new(
            user.id,
            credential.password_hash.clone(),
            credential.verification.clone(),
        );
        self.0.credentials.lock().unwrap().insert(user.id, cred);
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut users = self.0.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(DomainError::UserNotFound(user.id));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn list(&self, filter: RoleFilter) -> RepoResult<Vec<User>> {
        let users = self.0.users.lock().unwrap();
        let mut result: Vec<User> = users
            .values()
            .filter(|u| match filter {
                RoleFilter::All => true,
                RoleFilter::CustomersOnly => u.role == UserRole::Customer,
                RoleFilter::StaffOnly => u.role != UserRole::Customer,
            })
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }
}

#[async_trait]
impl CredentialRepository for TestCredentialRepo {
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Credential>> {
        Ok(self.0.credentials.lock().unwrap().get(&user_id).cloned())
    }

    async fn update(&self, credential: &Credential) -> RepoResult<()> {
        let mut creds = self.0.credentials.lock().unwrap();
        if !creds.contains_key(&credential.user_id) {
            return Err(DomainError::CredentialNotFound(credential.user_id));
        }
        creds.insert(credential.user_id, credential.clone());
        Ok(())
    }
}

#[async_trait]
impl Notifier for TestNotifier {
    async fn notify(&self, notification: &NewNotification) -> RepoResult<()> {
        if self.0.fail_notify.load(Ordering::SeqCst) {
            return Err(DomainError::InternalError("delivery down".to_string()));
        }
        self.0.notifications.lock().unwrap().push(Notification {
            id: Uuid::new_v4(),
            user_id: notification.user_id,
            text: notification.text.clone(),
            body: notification.body.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_for(&self, user_id: Uuid) -> RepoResult<Vec<Notification>> {
        Ok(self
            .0
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// Cheap Argon2 parameters so the suite stays fast
pub fn test_password_service() -> PasswordService {
    PasswordService::new(&HashConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}

pub fn test_jwt_service() -> JwtService {
    JwtService::new(TEST_SECRET, 700)
}

/// Build a service context over a fresh in-memory backend
pub fn test_context() -> (ServiceContext, Arc<TestBackend>) {
    let backend = Arc::new(TestBackend::default());

    let ctx = ServiceContextBuilder::new()
        .user_repo(Arc::new(TestUserRepo(backend.clone())))
        .credential_repo(Arc::new(TestCredentialRepo(backend.clone())))
        .notifier(Arc::new(TestNotifier(backend.clone())))
        .jwt_service(Arc::new(test_jwt_service()))
        .password_service(Arc::new(test_password_service()))
        .verification(VerificationConfig::default())
        .build()
        .unwrap();

    (ctx, backend)
}

/// Seed a user with a hashed credential straight into the backend
pub fn seed_user(
    backend: &TestBackend,
    role: UserRole,
    is_admin: bool,
    status: UserStatus,
    phone_number: &str,
    email: Option<&str>,
    password: &str,
) -> User {
    let mut user = User::register(
        "Test".to_string(),
        "User".to_string(),
        email.map(str::to_string),
        phone_number.to_string(),
        role,
    );
    user.is_admin = is_admin;
    user.status = status;

    let hash = test_password_service().hash(password).unwrap();
    let credential = Credential::new(user.id, hash, None);

    backend.users.lock().unwrap().insert(user.id, user.clone());
    backend
        .credentials
        .lock()
        .unwrap()
        .insert(user.id, credential);

    user
}

/// Set a verification challenge directly on a seeded user's credential
pub fn set_challenge(backend: &TestBackend, user_id: Uuid, code: &str, minutes_from_now: i64) {
    let mut creds = backend.credentials.lock().unwrap();
    let cred = creds.get_mut(&user_id).unwrap();
    cred.set_verification(OtpChallenge::new(
        code.to_string(),
        Utc::now() + chrono::Duration::minutes(minutes_from_now),
    ));
}
