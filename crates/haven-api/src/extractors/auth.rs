//! Admin authentication extractor
//!
//! Appears explicitly in every admin handler signature. Three checks, all
//! failing closed with 401: bearer token present, token verifies against
//! the token service, and the token's admin id still resolves in the
//! credential store.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use haven_common::AppError;
use haven_core::AdminRepository;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated administrator extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    pub role: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Verify the token signature and expiry
        let claims = app_state
            .token_service()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        let admin_id = claims.admin_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid admin ID in token");
            ApiError::App(e)
        })?;

        // Re-resolve the principal: a valid token for a deleted admin is
        // still a rejection.
        let admin = app_state
            .service_context()
            .admin_repo()
            .find_by_id(admin_id)
            .await
            .map_err(|e| ApiError::App(AppError::Database(e.to_string())))?
            .ok_or_else(|| {
                tracing::warn!(admin_id, "Token refers to a missing admin");
                ApiError::App(AppError::AdminGone)
            })?;

        Ok(AdminUser {
            id: admin.id,
            email: admin.email,
            role: admin.role,
        })
    }
}
