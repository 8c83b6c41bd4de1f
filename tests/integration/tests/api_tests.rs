//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests
//!
//! Without those variables the tests are skipped.

use integration_tests::{
    assert_json, assert_status, check_test_env, ApiEnvelope, AuthData, ChangePasswordRequest,
    LoginRequest, RegisterRequest, TestServer, UserPayload,
};
use reqwest::StatusCode;

// ============================================================================
// Plumbing
// ============================================================================

#[tokio::test]
async fn test_welcome_route() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");

    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "success");
    assert!(body.message.contains("Welcome"));
}

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_unknown_route_gets_404_envelope() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/nope").await.expect("Request failed");

    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.status, "fail");
    assert_eq!(body.error.unwrap().error_source, "404_NOT_FOUND_ERROR");
}

// ============================================================================
// Registration and login
// ============================================================================

#[tokio::test]
async fn test_register_login_me_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // Register: 201, status UNVERIFIED, immediate session token
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ApiEnvelope<AuthData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let registered = body.data.unwrap();
    assert_eq!(registered.user_data.status, "UNVERIFIED");
    assert_eq!(registered.user_data.role, "CUSTOMER");
    assert!(!registered.token.is_empty());

    // Login with the same credentials: 200 and a token longer than 30 chars
    let login = LoginRequest::from_register(&request);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let body: ApiEnvelope<AuthData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Login successful");
    let auth = body.data.unwrap();
    assert!(auth.token.len() > 30);
    assert_eq!(auth.expires.as_deref(), Some("700 days"));

    // The token resolves to the same profile
    let response = server.get_auth("/api/v1/users/me", &auth.token).await.unwrap();
    let body: ApiEnvelope<UserPayload> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.unwrap().phone_number, request.phone_number);
}

#[tokio::test]
async fn test_register_duplicate_phone_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.status, "fail");
    assert_eq!(body.message, "User already exists");
}

#[tokio::test]
async fn test_register_missing_phone_is_unprocessable() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/auth/register",
            &serde_json::json!({
                "first_name": "Test",
                "last_name": "User",
                "password": "password1"
            }),
        )
        .await
        .unwrap();

    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_unknown_identifier() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                identifier: "00000000000000".to_string(),
                password: "password1".to_string(),
            },
        )
        .await
        .unwrap();

    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.message, "User not found. Please check your credentials");
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                identifier: request.phone_number.clone(),
                password: "password-wrong".to_string(),
            },
        )
        .await
        .unwrap();

    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(
        body.message,
        "Account details supplied is incorrect, please check and try again"
    );
}

// ============================================================================
// Authenticated surface
// ============================================================================

#[tokio::test]
async fn test_me_without_token_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_with_garbage_token_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/v1/users/me", "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_change_password_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ApiEnvelope<AuthData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let token = body.data.unwrap().token;

    // Same old/new pair: rejected before the old password is checked
    let response = server
        .patch_auth(
            "/api/v1/auth/change-password",
            &token,
            &ChangePasswordRequest {
                old_password: "password-wrong".to_string(),
                new_password: "password-wrong".to_string(),
            },
        )
        .await
        .unwrap();
    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Cannot change password to old password");

    // Wrong old password
    let response = server
        .patch_auth(
            "/api/v1/auth/change-password",
            &token,
            &ChangePasswordRequest {
                old_password: "password-wrong".to_string(),
                new_password: "password2".to_string(),
            },
        )
        .await
        .unwrap();
    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.message,
        "Incorrect old password. Unable to change password"
    );

    // Correct change: 202
    let response = server
        .patch_auth(
            "/api/v1/auth/change-password",
            &token,
            &ChangePasswordRequest {
                old_password: request.password.clone(),
                new_password: "password2".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();

    // Old password no longer works, the new one does
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                identifier: request.phone_number.clone(),
                password: request.password.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                identifier: request.phone_number.clone(),
                password: "password2".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Authorization gates
// ============================================================================

#[tokio::test]
async fn test_listing_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ApiEnvelope<AuthData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let token = body.data.unwrap().token;

    let response = server.get_auth("/api/v1/users", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_update_is_self_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Two separate accounts
    let first = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &first).await.unwrap();
    let body: ApiEnvelope<AuthData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let first_token = body.data.unwrap().token;

    let second = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &second).await.unwrap();
    let body: ApiEnvelope<AuthData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let second_id = body.data.unwrap().user_data.id;

    // First user cannot update second user's profile
    let response = server
        .put_auth(
            &format!("/api/v1/users/{second_id}"),
            &first_token,
            &serde_json::json!({"first_name": "Hijack"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_staff_creation_downgrades_non_admin_requests() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ApiEnvelope<AuthData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let token = body.data.unwrap().token;

    // A non-admin asking for a SUPERVISOR gets a CUSTOMER, not an error
    let staff = RegisterRequest::unique();
    let response = server
        .post_auth(
            "/api/v1/auth/add-staff",
            &token,
            &serde_json::json!({
                "first_name": staff.first_name,
                "last_name": staff.last_name,
                "phone_number": staff.phone_number,
                "password": staff.password,
                "role": "SUPERVISOR"
            }),
        )
        .await
        .unwrap();

    let body: ApiEnvelope<UserPayload> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.data.unwrap().role, "CUSTOMER");
}
