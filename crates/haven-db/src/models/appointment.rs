//! Appointment database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for the appointments table.
/// The status column is TEXT; the mapper parses it into the entity enum.
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentModel {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub message: String,
    pub status: String,
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
}
