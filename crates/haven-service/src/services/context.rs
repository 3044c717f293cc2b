//! Service context - dependency container for services
//!
//! Holds the repositories, token service, mailer, resume store, and audit
//! recorder needed by services. Configuration is injected here at startup;
//! nothing reads globals afterwards.

use std::sync::Arc;

use haven_common::auth::TokenService;
use haven_core::traits::{
    AdminRepository, AppointmentStore, ApplicationStore, AuditLogRepository, MessageStore,
};
use haven_db::PgPool;

use super::audit::AuditRecorder;
use super::files::ResumeStore;
use super::mailer::Mailer;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    admin_repo: Arc<dyn AdminRepository>,
    appointment_repo: Arc<AppointmentStore>,
    application_repo: Arc<ApplicationStore>,
    message_repo: Arc<MessageStore>,
    audit_repo: Arc<dyn AuditLogRepository>,

    // Side-effect services
    audit: AuditRecorder,
    mailer: Arc<Mailer>,
    resume_store: Arc<ResumeStore>,

    // Auth
    token_service: Arc<TokenService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        admin_repo: Arc<dyn AdminRepository>,
        appointment_repo: Arc<AppointmentStore>,
        application_repo: Arc<ApplicationStore>,
        message_repo: Arc<MessageStore>,
        audit_repo: Arc<dyn AuditLogRepository>,
        token_service: Arc<TokenService>,
        mailer: Arc<Mailer>,
        resume_store: Arc<ResumeStore>,
    ) -> Self {
        let audit = AuditRecorder::new(Arc::clone(&audit_repo));

        Self {
            pool,
            admin_repo,
            appointment_repo,
            application_repo,
            message_repo,
            audit_repo,
            audit,
            mailer,
            resume_store,
            token_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the administrator repository
    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }

    /// Get the appointment store
    pub fn appointment_repo(&self) -> &AppointmentStore {
        self.appointment_repo.as_ref()
    }

    /// Get the career application store
    pub fn application_repo(&self) -> &ApplicationStore {
        self.application_repo.as_ref()
    }

    /// Get the contact message store
    pub fn message_repo(&self) -> &MessageStore {
        self.message_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    /// Get the fire-and-forget audit recorder
    pub fn audit(&self) -> &AuditRecorder {
        &self.audit
    }

    /// Get a shareable handle to the mailer (for detached send tasks)
    pub fn mailer(&self) -> Arc<Mailer> {
        Arc::clone(&self.mailer)
    }

    /// Get the resume file store
    pub fn resume_store(&self) -> &ResumeStore {
        self.resume_store.as_ref()
    }

    /// Get the token service
    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
    appointment_repo: Option<Arc<AppointmentStore>>,
    application_repo: Option<Arc<ApplicationStore>>,
    message_repo: Option<Arc<MessageStore>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    token_service: Option<Arc<TokenService>>,
    mailer: Option<Arc<Mailer>>,
    resume_store: Option<Arc<ResumeStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    pub fn appointment_repo(mut self, repo: Arc<AppointmentStore>) -> Self {
        self.appointment_repo = Some(repo);
        self
    }

    pub fn application_repo(mut self, repo: Arc<ApplicationStore>) -> Self {
        self.application_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<MessageStore>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    pub fn mailer(mut self, mailer: Arc<Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn resume_store(mut self, store: Arc<ResumeStore>) -> Self {
        self.resume_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.admin_repo
                .ok_or_else(|| ServiceError::validation("admin_repo is required"))?,
            self.appointment_repo
                .ok_or_else(|| ServiceError::validation("appointment_repo is required"))?,
            self.application_repo
                .ok_or_else(|| ServiceError::validation("application_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.audit_repo
                .ok_or_else(|| ServiceError::validation("audit_repo is required"))?,
            self.token_service
                .ok_or_else(|| ServiceError::validation("token_service is required"))?,
            self.mailer
                .ok_or_else(|| ServiceError::validation("mailer is required"))?,
            self.resume_store
                .ok_or_else(|| ServiceError::validation("resume_store is required"))?,
        ))
    }
}
