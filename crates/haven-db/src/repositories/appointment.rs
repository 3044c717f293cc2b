//! PostgreSQL implementation of the appointment store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::{Appointment, AppointmentStatus, NewAppointment};
use haven_core::lifecycle::RequestStatus;
use haven_core::traits::{ReplyRepository, RepoResult, RequestRepository};

use crate::models::AppointmentModel;

use super::error::{appointment_not_found, map_db_error};

const COLUMNS: &str = "id, full_name, email, phone, service_type, preferred_date, \
                       preferred_time, message, status, admin_reply, created_at";

/// PostgreSQL implementation of the appointment store
#[derive(Clone)]
pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    /// Create a new PgAppointmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestRepository for PgAppointmentRepository {
    type Record = Appointment;
    type Draft = NewAppointment;
    type Status = AppointmentStatus;

    #[instrument(skip(self, draft), fields(email = %draft.email))]
    async fn insert(&self, draft: NewAppointment) -> RepoResult<Appointment> {
        let model = sqlx::query_as::<_, AppointmentModel>(&format!(
            r"
            INSERT INTO appointments
                (full_name, email, phone, service_type, preferred_date, preferred_time, message, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            ",
        ))
        .bind(&draft.full_name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.service_type)
        .bind(draft.preferred_date)
        .bind(&draft.preferred_time)
        .bind(&draft.message)
        .bind(AppointmentStatus::initial().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.try_into()
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: Option<AppointmentStatus>) -> RepoResult<Vec<Appointment>> {
        let models = match filter {
            Some(status) => {
                sqlx::query_as::<_, AppointmentModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM appointments
                    WHERE status = $1
                    ORDER BY created_at DESC
                    ",
                ))
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, AppointmentModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM appointments
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
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Appointment>> {
        let model = sqlx::query_as::<_, AppointmentModel>(&format!(
            r"
            SELECT {COLUMNS} FROM appointments WHERE id = $1
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
        status: AppointmentStatus,
    ) -> RepoResult<Appointment> {
        let model = sqlx::query_as::<_, AppointmentModel>(&format!(
            r"
            UPDATE appointments SET status = $2
            WHERE id = $1
            RETURNING {COLUMNS}
            ",
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| appointment_not_found(id))?;

        model.try_into()
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: Option<AppointmentStatus>) -> RepoResult<i64> {
        let count = match filter {
            Some(status) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM appointments WHERE status = $1",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM appointments")
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
        filter: Option<AppointmentStatus>,
        limit: i64,
    ) -> RepoResult<Vec<Appointment>> {
        let models = match filter {
            Some(status) => {
                sqlx::query_as::<_, AppointmentModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM appointments
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
                sqlx::query_as::<_, AppointmentModel>(&format!(
                    r"
                    SELECT {COLUMNS} FROM appointments
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
impl ReplyRepository for PgAppointmentRepository {
    #[instrument(skip(self, reply))]
    async fn set_reply(&self, id: i64, reply: &str) -> RepoResult<Appointment> {
        let model = sqlx::query_as::<_, AppointmentModel>(&format!(
            r"
            UPDATE appointments SET admin_reply = $2
            WHERE id = $1
            RETURNING {COLUMNS}
            ",
        ))
        .bind(id)
        .bind(reply)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| appointment_not_found(id))?;

        model.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAppointmentRepository>();
    }
}
