//! Administrator database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the administrators table
#[derive(Debug, Clone, FromRow)]
pub struct AdminModel {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
