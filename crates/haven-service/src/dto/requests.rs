//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. A payload that fails validation never reaches a repository.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Reject anything that is not a calendar date in YYYY-MM-DD form.
fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            let mut err = ValidationError::new("date_format");
            err.message = Some(Cow::Borrowed("Date must be in YYYY-MM-DD format"));
            err
        })
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Admin login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

// ============================================================================
// Public Submission Requests
// ============================================================================

/// Public appointment request submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAppointmentRequest {
    #[validate(length(min = 2, max = 100, message = "Full name must be at least 2 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 10, max = 32, message = "Phone number must be at least 10 digits"))]
    pub phone: String,

    #[validate(length(min = 1, max = 100, message = "Please select a service type"))]
    pub service_type: String,

    #[validate(custom(function = validate_iso_date))]
    pub preferred_date: String,

    #[validate(length(min = 1, max = 32, message = "Please select a preferred time"))]
    pub preferred_time: String,

    #[validate(length(min = 10, max = 2000, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl SubmitAppointmentRequest {
    /// Parse the preferred date string
    ///
    /// # Errors
    /// Returns an error if the string is not a YYYY-MM-DD calendar date
    pub fn preferred_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(&self.preferred_date, "%Y-%m-%d")
    }
}

/// Public career application submission (multipart form fields; the resume
/// file travels separately)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitApplicationRequest {
    #[validate(length(min = 2, max = 100, message = "Full name must be at least 2 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 10, max = 32, message = "Phone number must be at least 10 digits"))]
    pub phone: String,

    #[validate(length(min = 1, max = 100, message = "Please select a position"))]
    pub position: String,

    #[validate(length(max = 2000, message = "Cover letter must be at most 2000 characters"))]
    pub cover_letter: Option<String>,
}

/// Public contact message submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitContactRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 10, max = 32, message = "Phone number must be at least 10 digits"))]
    pub phone: Option<String>,

    #[validate(length(min = 2, max = 200, message = "Subject must be at least 2 characters"))]
    pub subject: String,

    #[validate(length(min = 10, max = 5000, message = "Message must be at least 10 characters"))]
    pub message: String,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Status transition request. The value is parsed against the target
/// entity's own enumeration in the service layer; anything outside it is a
/// validation error and no write happens.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Admin reply request (appointments and contact messages)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplyRequest {
    #[validate(length(min = 10, max = 5000, message = "Reply must be at least 10 characters"))]
    pub reply: String,
}
