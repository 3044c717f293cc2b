//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::{AuditLogWithAdmin, NewAuditEntry};
use haven_core::traits::{AuditLogRepository, RepoResult};

use crate::models::AuditLogWithAdminModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AuditLogRepository. Append-only.
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, entry), fields(admin_id = entry.admin_id, action = %entry.action))]
    async fn append(&self, entry: NewAuditEntry) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO audit_logs (admin_id, action, entity_type, entity_id)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(entry.admin_id)
        .bind(&entry.action)
        .bind(&entry.entity_type)
        .bind(entry.entity_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<AuditLogWithAdmin>> {
        let models = sqlx::query_as::<_, AuditLogWithAdminModel>(
            r"
            SELECT l.id, l.admin_id, l.action, l.entity_type, l.entity_id, l.created_at,
                   a.full_name AS admin_name, a.email AS admin_email
            FROM audit_logs l
            JOIN administrators a ON a.id = l.admin_id
            ORDER BY l.created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(AuditLogWithAdmin::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAuditLogRepository>();
    }
}
