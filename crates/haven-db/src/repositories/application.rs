//! PostgreSQL implementation of the career application store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::{ApplicationStatus, CareerApplication, NewApplication};
use haven_core::lifecycle::RequestStatus;
use haven_core::traits::{RepoResult, RequestRepository};

use crate::models::ApplicationModel;

use super::error::{application_not_found, map_db_error};

const COLUMNS: &str = "id, full_name, email, phone, position, cover_letter, \
                       resume_path, status, created_at";

/// PostgreSQL implementation of the career application store
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    /// Create a new PgApplicationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestRepository for PgApplicationRepository {
    type Record = CareerApplication;
    type Draft = NewApplication;
    type Status = ApplicationStatus;

    #[instrument(skip(self, draft), fields(email = %draft.email))]
    async fn insert(&self, draft: NewApplication) -> RepoResult<CareerApplication> {
        let model = sqlx::query_as::<_, ApplicationModel>(&format!(
            r"
            INSERT INTO career_applications
                (full_name, email, phone, position, cover_letter, resume_path, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            ",
        ))
        .bind(&draft.full_name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.position)
        .bind(&draft.cover_letter)
        .bind(&draft.resume_path)
        .bind(ApplicationStatus::initial().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.try_into()
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: Option<ApplicationStatus>) -> RepoResult<Vec<CareerApplication>> {
        let models = match filter {
            Some(status) => {
                sqlx::query_as::<_, ApplicationModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM career_applications
                    WHERE status = $1
                    ORDER BY created_at DESC
                    ",
                ))
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ApplicationModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM career_applications
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
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<CareerApplication>> {
        let model = sqlx::query_as::<_, ApplicationModel>(&format!(
            r"
            SELECT {COLUMNS} FROM career_applications WHERE id = $1
            ",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(TryInto::try_into).transpose()
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> RepoResult<CareerApplication> {
        let model = sqlx::query_as::<_, ApplicationModel>(&format!(
            r"
            UPDATE career_applications SET status = $2
            WHERE id = $1
            RETURNING {COLUMNS}
            ",
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| application_not_found(id))?;

        model.try_into()
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: Option<ApplicationStatus>) -> RepoResult<i64> {
        let count = match filter {
            Some(status) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM career_applications WHERE status = $1",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM career_applications")
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
        filter: Option<ApplicationStatus>,
        limit: i64,
    ) -> RepoResult<Vec<CareerApplication>> {
        let models = match filter {
            Some(status) => {
                sqlx::query_as::<_, ApplicationModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM career_applications
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
                sqlx::query_as::<_, ApplicationModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM career_applications
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgApplicationRepository>();
    }
}
