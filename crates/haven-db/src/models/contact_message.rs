//! Contact message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the contact_messages table
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageModel {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
    pub replied_at: Option<DateTime<Utc>>,
}
