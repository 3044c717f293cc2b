//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Statuses are
//! serialized in their stored SCREAMING_SNAKE_CASE form.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use haven_core::{AppointmentStatus, ApplicationStatus, MessageStatus};

// ============================================================================
// Common Response Types
// ============================================================================

/// Acknowledgement for a public submission
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub id: i64,
    pub message: String,
}

impl SubmissionResponse {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            success: true,
            id,
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Minimal admin profile returned on login
#[derive(Debug, Clone, Serialize)]
pub struct AdminProfile {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

/// Login response with the signed token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub expires_in: i64,
    pub admin: AdminProfile,
}

impl LoginResponse {
    pub fn new(token: String, expires_in: i64, admin: AdminProfile) -> Self {
        Self {
            success: true,
            token,
            expires_in,
            admin,
        }
    }
}

// ============================================================================
// Request Entity Responses
// ============================================================================

/// Appointment as returned to admins
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub message: String,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Career application as returned to admins
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub resume_path: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// Contact message as returned to admins
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Overview Responses
// ============================================================================

/// Audit entry with the acting admin, for the activity feed
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntryResponse {
    pub id: i64,
    pub admin_id: i64,
    pub admin_name: String,
    pub admin_email: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Appointment counts per status
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentCounts {
    pub total: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub completed: i64,
    pub cancelled: i64,
}

/// Career application counts per status
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationCounts {
    pub total: i64,
    pub new: i64,
    pub reviewing: i64,
    pub shortlisted: i64,
    pub rejected: i64,
}

/// Contact message counts per status
#[derive(Debug, Clone, Serialize)]
pub struct MessageCounts {
    pub total: i64,
    pub unread: i64,
    pub read: i64,
    pub replied: i64,
}

/// Aggregated counts per entity kind
#[derive(Debug, Clone, Serialize)]
pub struct OverviewStats {
    pub appointments: AppointmentCounts,
    pub applications: ApplicationCounts,
    pub messages: MessageCounts,
}

/// Dashboard overview: counts, attention queues, recent activity
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub success: bool,
    pub stats: OverviewStats,
    pub recent_appointments: Vec<AppointmentResponse>,
    pub recent_applications: Vec<ApplicationResponse>,
    pub recent_activity: Vec<AuditEntryResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_response_serializes_success() {
        let response = SubmissionResponse::new(7, "Appointment request submitted successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_status_serialized_in_stored_form() {
        let response = ReadinessResponse::ready(true);
        assert_eq!(response.status, "ready");

        let json = serde_json::to_value(AppointmentStatus::Confirmed).unwrap();
        assert_eq!(json, "CONFIRMED");
    }
}
