//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Appointment submission request
#[derive(Debug, Serialize)]
pub struct SubmitAppointmentRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
}

impl SubmitAppointmentRequest {
    /// The canonical valid submission
    pub fn jane_doe() -> Self {
        Self {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "5551234567".to_string(),
            service_type: "Personal Care".to_string(),
            preferred_date: "2025-06-01".to_string(),
            preferred_time: "10:00".to_string(),
            message: "Need help with daily tasks".to_string(),
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("jane{suffix}@example.com"),
            ..Self::jane_doe()
        }
    }
}

/// Contact message submission request
#[derive(Debug, Serialize)]
pub struct SubmitContactRequest {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl SubmitContactRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            full_name: "Sam Lee".to_string(),
            email: format!("sam{suffix}@example.com"),
            phone: None,
            subject: "Service areas".to_string(),
            message: "Do you cover the north side of town?".to_string(),
        }
    }
}

/// Admin login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Status update request
#[derive(Debug, Serialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Reply request
#[derive(Debug, Serialize)]
pub struct ReplyRequest {
    pub reply: String,
}

/// Submission acknowledgement response
#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub id: i64,
    pub message: String,
}

/// Admin profile in the login response
#[derive(Debug, Deserialize)]
pub struct AdminProfile {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub expires_in: i64,
    pub admin: AdminProfile,
}

/// Appointment as returned by the admin endpoints
#[derive(Debug, Deserialize)]
pub struct AppointmentResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub status: String,
    #[serde(default)]
    pub admin_reply: Option<String>,
}

/// Error response envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
