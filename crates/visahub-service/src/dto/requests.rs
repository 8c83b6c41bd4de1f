//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;
use visahub_core::UserRole;

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request - the identifier is an email address or a phone number
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 60, message = "Identifier must be 1-60 characters"))]
    pub identifier: String,

    #[validate(length(min = 8, max = 50, message = "Password must be 8-50 characters"))]
    pub password: String,
}

/// Self-registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 60, message = "First name must be 1-60 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 60, message = "Last name must be 1-60 characters"))]
    pub last_name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 60, message = "Email must be at most 60 characters")
    )]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 15, message = "Phone number must be 1-15 characters"))]
    pub phone_number: String,

    #[validate(length(min = 8, max = 50, message = "Password must be 8-50 characters"))]
    pub password: String,

    /// Requested role; defaults to CUSTOMER
    #[serde(default)]
    pub role: UserRole,
}

/// Staff provisioning request
///
/// Same shape as registration; the requested role only sticks when the
/// caller is an admin.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaffRequest {
    #[validate(length(min = 1, max = 60, message = "First name must be 1-60 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 60, message = "Last name must be 1-60 characters"))]
    pub last_name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 60, message = "Email must be at most 60 characters")
    )]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 15, message = "Phone number must be 1-15 characters"))]
    pub phone_number: String,

    #[validate(length(min = 8, max = 50, message = "Password must be 8-50 characters"))]
    pub password: String,

    #[serde(default)]
    pub role: UserRole,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 8, max = 50, message = "Password must be 8-50 characters"))]
    pub old_password: String,

    #[validate(length(min = 8, max = 50, message = "Password must be 8-50 characters"))]
    pub new_password: String,
}

/// Verification code submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(length(equal = 5, message = "Verification code must be 5 digits"))]
    pub token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 60, message = "First name must be 1-60 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 60, message = "Last name must be 1-60 characters"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 15, message = "Phone number must be 1-15 characters"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 200, message = "Profile image URL must be at most 200 characters"))]
    pub profile_img: Option<String>,

    pub is_onboarded: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_bounds() {
        let ok = LoginRequest {
            identifier: "08011112222".to_string(),
            password: "password1".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short_password = LoginRequest {
            identifier: "08011112222".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_register_request_requires_phone() {
        let request = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: None,
            phone_number: String::new(),
            password: "password1".to_string(),
            role: UserRole::default(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_email_shape() {
        let request = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: Some("not-an-email".to_string()),
            phone_number: "08011112222".to_string(),
            password: "password1".to_string(),
            role: UserRole::default(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_role_defaults_to_customer() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{
                "first_name": "Ada",
                "last_name": "Obi",
                "phone_number": "08011112222",
                "password": "password1"
            }"#,
        )
        .unwrap();
        assert_eq!(request.role, UserRole::Customer);
    }

    #[test]
    fn test_verify_code_length() {
        let ok = VerifyCodeRequest {
            token: "54321".to_string(),
        };
        assert!(ok.validate().is_ok());

        let wrong = VerifyCodeRequest {
            token: "543210".to_string(),
        };
        assert!(wrong.validate().is_err());
    }
}
