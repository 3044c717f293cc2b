//! PostgreSQL implementation of the contact message store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::{ContactMessage, MessageStatus, NewContactMessage};
use haven_core::lifecycle::RequestStatus;
use haven_core::traits::{ReplyRepository, RepoResult, RequestRepository};

use crate::models::ContactMessageModel;

use super::error::{map_db_error, message_not_found};

const COLUMNS: &str = "id, full_name, email, phone, subject, message, status, \
                       admin_reply, created_at, replied_at";

/// PostgreSQL implementation of the contact message store
#[derive(Clone)]
pub struct PgContactMessageRepository {
    pool: PgPool,
}

impl PgContactMessageRepository {
    /// Create a new PgContactMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestRepository for PgContactMessageRepository {
    type Record = ContactMessage;
    type Draft = NewContactMessage;
    type Status = MessageStatus;

    #[instrument(skip(self, draft), fields(email = %draft.email))]
    async fn insert(&self, draft: NewContactMessage) -> RepoResult<ContactMessage> {
        let model = sqlx::query_as::<_, ContactMessageModel>(&format!(
            r"
            INSERT INTO contact_messages (full_name, email, phone, subject, message, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            ",
        ))
        .bind(&draft.full_name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.subject)
        .bind(&draft.message)
        .bind(MessageStatus::initial().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.try_into()
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: Option<MessageStatus>) -> RepoResult<Vec<ContactMessage>> {
        let models = match filter {
            Some(status) => {
                sqlx::query_as::<_, ContactMessageModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM contact_messages
                    WHERE status = $1
                    ORDER BY created_at DESC
                    ",
                ))
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ContactMessageModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM contact_messages
                    ORDER BY created_at DESC
                    ",
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        models.into_iter().map(TryInto::try_into).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ContactMessage>> {
        let model = sqlx::query_as::<_, ContactMessageModel>(&format!(
            r"
            SELECT {COLUMNS} FROM contact_messages WHERE id = $1
            ",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(TryInto::try_into).transpose()
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: MessageStatus) -> RepoResult<ContactMessage> {
        let model = sqlx::query_as::<_, ContactMessageModel>(&format!(
            r"
            UPDATE contact_messages SET status = $2
            WHERE id = $1
            RETURNING {COLUMNS}
            ",
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| message_not_found(id))?;

        model.try_into()
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: Option<MessageStatus>) -> RepoResult<i64> {
        let count = match filter {
            Some(status) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM contact_messages WHERE status = $1",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_messages")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn recent(
        &self,
        filter: Option<MessageStatus>,
        limit: i64,
    ) -> RepoResult<Vec<ContactMessage>> {
        let models = match filter {
            Some(status) => {
                sqlx::query_as::<_, ContactMessageModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM contact_messages
                    WHERE status = $1
                    ORDER BY created_at DESC
                    LIMIT $2
                    ",
                ))
                .bind(status.as_str())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ContactMessageModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM contact_messages
                    ORDER BY created_at DESC
                    LIMIT $1
                    ",
                ))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        models.into_iter().map(TryInto::try_into).collect()
    }
}

#[async_trait]
impl ReplyRepository for PgContactMessageRepository {
    /// Storing a reply also stamps replied_at and forces the status to
    /// `Replied` in the same single-row write.
    #[instrument(skip(self, reply))]
    async fn set_reply(&self, id: i64, reply: &str) -> RepoResult<ContactMessage> {
        let model = sqlx::query_as::<_, ContactMessageModel>(&format!(
            r"
            UPDATE contact_messages
            SET admin_reply = $2, replied_at = NOW(), status = $3
            WHERE id = $1
            RETURNING {COLUMNS}
            ",
        ))
        .bind(id)
        .bind(reply)
        .bind(MessageStatus::Replied.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| message_not_found(id))?;

        model.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgContactMessageRepository>();
    }
}
