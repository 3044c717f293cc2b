//! Career application database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the career_applications table
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationModel {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub cover_letter: Option<String>,
    pub resume_path: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
