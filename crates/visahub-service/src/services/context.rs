//! Service context - dependency container for services
//!
//! Holds repositories, the notifier, and the auth utilities every service
//! needs. Built once at startup and shared behind an `Arc` - nothing here is
//! module-level global state.

use std::sync::Arc;

use visahub_common::{JwtService, PasswordService, VerificationConfig};
use visahub_core::{CredentialRepository, Notifier, UserRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    credential_repo: Arc<dyn CredentialRepository>,
    notifier: Arc<dyn Notifier>,
    jwt_service: Arc<JwtService>,
    password_service: Arc<PasswordService>,
    verification: VerificationConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        credential_repo: Arc<dyn CredentialRepository>,
        notifier: Arc<dyn Notifier>,
        jwt_service: Arc<JwtService>,
        password_service: Arc<PasswordService>,
        verification: VerificationConfig,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            notifier,
            jwt_service,
            password_service,
            verification,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the credential repository
    pub fn credential_repo(&self) -> &dyn CredentialRepository {
        self.credential_repo.as_ref()
    }

    /// Get the notifier
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }

    /// Get the verification-code settings
    pub fn verification(&self) -> &VerificationConfig {
        &self.verification
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("verification", &self.verification)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    credential_repo: Option<Arc<dyn CredentialRepository>>,
    notifier: Option<Arc<dyn Notifier>>,
    jwt_service: Option<Arc<JwtService>>,
    password_service: Option<Arc<PasswordService>>,
    verification: VerificationConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            credential_repo: None,
            notifier: None,
            jwt_service: None,
            password_service: None,
            verification: VerificationConfig::default(),
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn credential_repo(mut self, repo: Arc<dyn CredentialRepository>) -> Self {
        self.credential_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn verification(mut self, config: VerificationConfig) -> Self {
        self.verification = config;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns an internal error if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            self.credential_repo
                .ok_or_else(|| ServiceError::internal("credential_repo is required"))?,
            self.notifier
                .ok_or_else(|| ServiceError::internal("notifier is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::internal("jwt_service is required"))?,
            self.password_service
                .ok_or_else(|| ServiceError::internal("password_service is required"))?,
            self.verification,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
