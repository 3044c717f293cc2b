//! Audit log database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: i64,
    pub admin_id: i64,
    pub action: String,
    pub entity_type: String,
    pub entity_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Audit log row joined with the acting admin's profile
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogWithAdminModel {
    pub id: i64,
    pub admin_id: i64,
    pub action: String,
    pub entity_type: String,
    pub entity_id: i64,
    pub created_at: DateTime<Utc>,
    pub admin_name: String,
    pub admin_email: String,
}
