//! # visahub-service
//!
//! Application layer: request/response DTOs and the services orchestrating
//! repositories, hashing, token issuance, and notifications.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    ChangePasswordRequest, CreateStaffRequest, LoginRequest, LoginResponse, NotificationData,
    RegisterRequest, RegisterResponse, UpdateUserRequest, UserData, VerifyCodeRequest,
};
pub use services::{
    AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SuspendOutcome,
    UserService, VerificationOutcome,
};
