//! Request and response DTOs

mod mappers;
mod requests;
mod responses;

pub use requests::{
    ChangePasswordRequest, CreateStaffRequest, LoginRequest, RegisterRequest, UpdateUserRequest,
    VerifyCodeRequest,
};
pub use responses::{LoginResponse, NotificationData, RegisterResponse, UserData};
