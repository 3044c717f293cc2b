//! Audit log entities - immutable records of mutating admin actions

use chrono::{DateTime, Utc};

/// An append-only audit record. Traceability, not enforcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    pub id: i64,
    pub admin_id: i64,
    pub action: String,
    pub entity_type: String,
    pub entity_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Payload for appending an audit record.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub admin_id: i64,
    pub action: String,
    pub entity_type: String,
    pub entity_id: i64,
}

/// Audit entry joined with the acting admin's profile, for the overview feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogWithAdmin {
    pub entry: AuditLogEntry,
    pub admin_name: String,
    pub admin_email: String,
}
