//! Appointment entity - a public request for a home-care visit

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::lifecycle::RequestStatus;

/// Appointment lifecycle.
///
/// Created as `Pending`; admins confirm, complete, or cancel. `Completed`
/// and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl RequestStatus for AppointmentStatus {
    const ENTITY: &'static str = "appointment";

    fn all() -> &'static [Self] {
        &[Self::Pending, Self::Confirmed, Self::Completed, Self::Cancelled]
    }

    fn initial() -> Self {
        Self::Pending
    }

    fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored appointment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub message: String,
    pub status: AppointmentStatus,
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated payload for creating an appointment.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
        assert!(!AppointmentStatus::Pending.is_terminal());
        assert!(!AppointmentStatus::Confirmed.is_terminal());
    }

    #[test]
    fn test_display_matches_stored_form() {
        assert_eq!(AppointmentStatus::Confirmed.to_string(), "CONFIRMED");
    }
}
