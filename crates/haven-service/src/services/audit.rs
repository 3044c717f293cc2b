//! Audit recorder - append-only trail of mutating admin actions
//!
//! Writes are dispatched as detached tasks: the triggering operation's
//! response never depends on the audit write, and a failed write is logged
//! and swallowed.

use std::sync::Arc;

use tracing::warn;

use haven_core::entities::NewAuditEntry;
use haven_core::traits::AuditLogRepository;

/// Entity type label for appointments in audit entries
pub const ENTITY_APPOINTMENT: &str = "appointment";
/// Entity type label for career applications in audit entries
pub const ENTITY_APPLICATION: &str = "career_application";
/// Entity type label for contact messages in audit entries
pub const ENTITY_MESSAGE: &str = "contact_message";

/// Fire-and-forget audit writer
#[derive(Clone)]
pub struct AuditRecorder {
    repo: Arc<dyn AuditLogRepository>,
}

impl AuditRecorder {
    /// Create a new recorder over the given repository
    pub fn new(repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { repo }
    }

    /// Record a mutating admin action without blocking the caller.
    ///
    /// Must be called from within a tokio runtime.
    pub fn record(
        &self,
        admin_id: i64,
        action: impl Into<String>,
        entity_type: &'static str,
        entity_id: i64,
    ) {
        let entry = NewAuditEntry {
            admin_id,
            action: action.into(),
            entity_type: entity_type.to_string(),
            entity_id,
        };

        let repo = Arc::clone(&self.repo);
        tokio::spawn(async move {
            if let Err(e) = repo.append(entry).await {
                warn!(error = %e, "Failed to create audit log entry");
            }
        });
    }
}

impl std::fmt::Debug for AuditRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditRecorder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use haven_core::entities::AuditLogWithAdmin;
    use haven_core::traits::RepoResult;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingRepo {
        entries: Mutex<Vec<NewAuditEntry>>,
    }

    #[async_trait]
    impl AuditLogRepository for RecordingRepo {
        async fn append(&self, entry: NewAuditEntry) -> RepoResult<()> {
            self.entries.lock().unwrap().push(entry);
            Ok(())
        }

        async fn recent(&self, _limit: i64) -> RepoResult<Vec<AuditLogWithAdmin>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_record_appends_detached() {
        let repo = Arc::new(RecordingRepo::default());
        let recorder = AuditRecorder::new(repo.clone());

        recorder.record(1, "Updated appointment status to CONFIRMED", ENTITY_APPOINTMENT, 42);

        // The write happens on a detached task; poll briefly for it.
        for _ in 0..50 {
            if !repo.entries.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let entries = repo.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].admin_id, 1);
        assert_eq!(entries[0].entity_type, "appointment");
        assert_eq!(entries[0].entity_id, 42);
        assert!(entries[0].action.contains("CONFIRMED"));
    }
}
