//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The three request kinds (appointments,
//! career applications, contact messages) share one generic repository
//! interface parameterized over record, draft, and status types.

use async_trait::async_trait;

use crate::entities::{
    Administrator, Appointment, AppointmentStatus, ApplicationStatus, AuditLogWithAdmin,
    CareerApplication, ContactMessage, MessageStatus, NewAppointment, NewApplication,
    NewAuditEntry, NewContactMessage,
};
use crate::error::DomainError;
use crate::lifecycle::RequestStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Generic Request Repository
// ============================================================================

/// Uniform storage interface for the three public request kinds.
///
/// `Status` is the entity's own enumeration, so an out-of-lifecycle value is
/// unrepresentable past the parse boundary. `list` and `recent` return rows
/// newest-created-first.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    type Record: Send + Sync;
    type Draft: Send + Sync;
    type Status: RequestStatus;

    /// Persist a validated draft with the entity's initial status and return
    /// the stored row (generated id, created_at).
    async fn insert(&self, draft: Self::Draft) -> RepoResult<Self::Record>;

    /// List all records, optionally restricted to one status.
    async fn list(&self, filter: Option<Self::Status>) -> RepoResult<Vec<Self::Record>>;

    /// Fetch a single record.
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Self::Record>>;

    /// Write a new status; the row must exist.
    async fn update_status(&self, id: i64, status: Self::Status) -> RepoResult<Self::Record>;

    /// Count records, optionally restricted to one status.
    async fn count(&self, filter: Option<Self::Status>) -> RepoResult<i64>;

    /// The `limit` most recent records, optionally restricted to one status.
    async fn recent(&self, filter: Option<Self::Status>, limit: i64)
        -> RepoResult<Vec<Self::Record>>;
}

/// Extension for the kinds that accept an admin reply.
#[async_trait]
pub trait ReplyRepository: RequestRepository {
    /// Store the admin reply. Contact messages also get `replied_at` stamped
    /// and their status forced to `Replied`.
    async fn set_reply(&self, id: i64, reply: &str) -> RepoResult<Self::Record>;
}

/// Trait object for the appointment store.
pub type AppointmentStore = dyn ReplyRepository<
    Record = Appointment,
    Draft = NewAppointment,
    Status = AppointmentStatus,
>;

/// Trait object for the career application store.
pub type ApplicationStore = dyn RequestRepository<
    Record = CareerApplication,
    Draft = NewApplication,
    Status = ApplicationStatus,
>;

/// Trait object for the contact message store.
pub type MessageStore = dyn ReplyRepository<
    Record = ContactMessage,
    Draft = NewContactMessage,
    Status = MessageStatus,
>;

// ============================================================================
// Administrator Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find administrator by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Administrator>>;

    /// Find administrator by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Administrator>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Stamp last_login with the current time
    async fn touch_last_login(&self, id: i64) -> RepoResult<()>;

    /// Create or update an administrator by email (seed/provisioning only)
    async fn upsert(
        &self,
        email: &str,
        full_name: &str,
        role: &str,
        password_hash: &str,
    ) -> RepoResult<Administrator>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an audit record. Append-only; there is no update or delete.
    async fn append(&self, entry: NewAuditEntry) -> RepoResult<()>;

    /// The `limit` most recent entries joined with the acting admin.
    async fn recent(&self, limit: i64) -> RepoResult<Vec<AuditLogWithAdmin>>;
}
