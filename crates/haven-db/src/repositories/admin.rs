//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::Administrator;
use haven_core::traits::{AdminRepository, RepoResult};
use haven_core::DomainError;

use crate::models::AdminModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AdminRepository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    /// Create a new PgAdminRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Administrator>> {
        let result = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, email, full_name, role, last_login, created_at
            FROM administrators
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Administrator::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Administrator>> {
        let result = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, email, full_name, role, last_login, created_at
            FROM administrators
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Administrator::from))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM administrators WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn touch_last_login(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE administrators SET last_login = NOW() WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AdminNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn upsert(
        &self,
        email: &str,
        full_name: &str,
        role: &str,
        password_hash: &str,
    ) -> RepoResult<Administrator> {
        let model = sqlx::query_as::<_, AdminModel>(
            r"
            INSERT INTO administrators (email, full_name, role, password_hash)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE
            SET full_name = EXCLUDED.full_name, role = EXCLUDED.role
            RETURNING id, email, full_name, role, last_login, created_at
            ",
        )
        .bind(email)
        .bind(full_name)
        .bind(role)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Administrator::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAdminRepository>();
    }
}
