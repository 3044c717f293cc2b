//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//! - For the authenticated flows: TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD
//!   matching an administrator provisioned with the haven-seed binary
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    admin_credentials, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Public Submission Tests
// ============================================================================

#[tokio::test]
async fn test_submit_appointment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SubmitAppointmentRequest::unique();

    let response = server.post("/api/v1/appointments", &request).await.unwrap();
    let body: SubmissionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert!(body.id > 0);
}

#[tokio::test]
async fn test_submit_appointment_invalid_payload() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SubmitAppointmentRequest {
        email: "not-an-email".to_string(),
        message: "short".to_string(),
        ..SubmitAppointmentRequest::jane_doe()
    };

    let response = server.post("/api/v1/appointments", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_submit_contact_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SubmitContactRequest::unique();

    let response = server.post("/api/v1/contact", &request).await.unwrap();
    let body: SubmissionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
}

#[tokio::test]
async fn test_submit_contact_message_too_short() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SubmitContactRequest {
        message: "hi".to_string(),
        ..SubmitContactRequest::unique()
    };

    let response = server.post("/api/v1/contact", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/v1/admin/login", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_list_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/admin/appointments").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_list_rejects_garbage_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_auth("/api/v1/admin/appointments", "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Admin Flow Tests (require a provisioned administrator)
// ============================================================================

async fn login(server: &TestServer) -> Option<String> {
    let (email, password) = match admin_credentials() {
        Some(creds) => creds,
        None => {
            eprintln!("Skipping test: TEST_ADMIN_EMAIL / TEST_ADMIN_PASSWORD not set");
            return None;
        }
    };

    let response = server
        .post("/api/v1/admin/login", &LoginRequest { email, password })
        .await
        .unwrap();
    let body: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert!(!body.token.is_empty());
    Some(body.token)
}

#[tokio::test]
async fn test_appointment_status_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let Some(token) = login(&server).await else {
        return;
    };

    // Submit an appointment publicly
    let request = SubmitAppointmentRequest::unique();
    let response = server.post("/api/v1/appointments", &request).await.unwrap();
    let submission: SubmissionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // It shows up as PENDING
    let response = server
        .get_auth(
            &format!("/api/v1/admin/appointments/{}", submission.id),
            &token,
        )
        .await
        .unwrap();
    let appointment: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(appointment.status, "PENDING");

    // Confirm it
    let response = server
        .put_auth(
            &format!("/api/v1/admin/appointments/{}", submission.id),
            &token,
            &UpdateStatusRequest {
                status: "CONFIRMED".to_string(),
            },
        )
        .await
        .unwrap();
    let appointment: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(appointment.status, "CONFIRMED");
}

#[tokio::test]
async fn test_appointment_rejects_foreign_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let Some(token) = login(&server).await else {
        return;
    };

    let request = SubmitAppointmentRequest::unique();
    let response = server.post("/api/v1/appointments", &request).await.unwrap();
    let submission: SubmissionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // A status from another entity's lifecycle is rejected...
    let response = server
        .put_auth(
            &format!("/api/v1/admin/appointments/{}", submission.id),
            &token,
            &UpdateStatusRequest {
                status: "SHORTLISTED".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // ...and the stored status is unchanged.
    let response = server
        .get_auth(
            &format!("/api/v1/admin/appointments/{}", submission.id),
            &token,
        )
        .await
        .unwrap();
    let appointment: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(appointment.status, "PENDING");
}

#[tokio::test]
async fn test_short_reply_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let Some(token) = login(&server).await else {
        return;
    };

    let request = SubmitContactRequest::unique();
    let response = server.post("/api/v1/contact", &request).await.unwrap();
    let submission: SubmissionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/admin/messages/{}/reply", submission.id),
            &token,
            &ReplyRequest {
                reply: "thanks".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_missing_appointment_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let Some(token) = login(&server).await else {
        return;
    };

    let response = server
        .get_auth("/api/v1/admin/appointments/999999999", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_missing_resume_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let Some(token) = login(&server).await else {
        return;
    };

    let response = server
        .get_auth("/api/v1/admin/careers/999999999/resume", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_overview() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let Some(token) = login(&server).await else {
        return;
    };

    let response = server.get_auth("/api/v1/admin/overview", &token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["success"], true);
    assert!(body["stats"]["appointments"]["total"].is_i64());
    assert!(body["recent_activity"].is_array());
}
