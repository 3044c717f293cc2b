//! Authentication service
//!
//! Handles admin login. There is no self-service registration; accounts are
//! provisioned through the seed binary.

use tracing::{info, instrument, warn};

use haven_common::auth::verify_password;
use haven_common::AppError;
use haven_core::traits::AdminRepository;

use crate::dto::{AdminProfile, LoginRequest, LoginResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password.
    ///
    /// Unknown email and wrong password produce the same generic error so
    /// the response never discloses which field was wrong.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let admin = self
            .ctx
            .admin_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: admin not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .admin_repo()
            .get_password_hash(admin.id)
            .await?
            .ok_or_else(|| {
                warn!(admin_id = admin.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(admin_id = admin.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        self.ctx.admin_repo().touch_last_login(admin.id).await?;

        let token = self
            .ctx
            .token_service()
            .issue(admin.id, &admin.email, &admin.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(admin_id = admin.id, "Admin logged in successfully");

        Ok(LoginResponse::new(
            token,
            self.ctx.token_service().token_expiry(),
            AdminProfile::from(&admin),
        ))
    }
}
