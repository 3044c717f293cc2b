//! Career application service
//!
//! Public multipart submission (resume validated and stored before the row
//! is written) plus the admin lifecycle and resume download.

use tracing::{info, instrument};

use haven_core::entities::{ApplicationStatus, NewApplication};
use haven_core::lifecycle::RequestStatus;
use haven_core::traits::RequestRepository;

use crate::dto::{
    ApplicationResponse, SubmissionResponse, SubmitApplicationRequest, UpdateStatusRequest,
};

use super::audit::ENTITY_APPLICATION;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::files::{content_type_for, download_filename, ResumeUpload};

/// A resume ready to stream back to an admin
#[derive(Debug)]
pub struct ResumeDownload {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

/// Career application service
pub struct ApplicationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ApplicationService<'a> {
    /// Create a new ApplicationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public submission. The resume is validated against the MIME
    /// allow-list and size ceiling before any byte is written; only then is
    /// the file stored and the row inserted.
    #[instrument(skip(self, request, resume), fields(email = %request.email))]
    pub async fn submit(
        &self,
        request: SubmitApplicationRequest,
        resume: ResumeUpload,
    ) -> ServiceResult<SubmissionResponse> {
        let store = self.ctx.resume_store();
        store.validate(&resume.content_type, resume.bytes.len() as u64)?;

        let resume_path = store.store(&resume.file_name, &resume.bytes).await?;

        let draft = NewApplication {
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
            position: request.position,
            cover_letter: request.cover_letter,
            resume_path,
        };

        let application = self.ctx.application_repo().insert(draft).await?;

        info!(application_id = application.id, "Career application created");

        Ok(SubmissionResponse::new(
            application.id,
            "Application submitted successfully",
        ))
    }

    /// List applications, optionally filtered by a status string
    #[instrument(skip(self))]
    pub async fn list(&self, status: Option<&str>) -> ServiceResult<Vec<ApplicationResponse>> {
        let filter = status.map(ApplicationStatus::parse).transpose()?;

        let applications = self.ctx.application_repo().list(filter).await?;
        Ok(applications.iter().map(ApplicationResponse::from).collect())
    }

    /// Fetch a single application
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ApplicationResponse> {
        let application = self
            .ctx
            .application_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Application", id.to_string()))?;

        Ok(ApplicationResponse::from(&application))
    }

    /// Admin status transition, validated against the application lifecycle
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        admin_id: i64,
        id: i64,
        request: UpdateStatusRequest,
    ) -> ServiceResult<ApplicationResponse> {
        let status = ApplicationStatus::parse(&request.status)?;

        let application = self.ctx.application_repo().update_status(id, status).await?;

        self.ctx.audit().record(
            admin_id,
            format!("Updated application status to {status}"),
            ENTITY_APPLICATION,
            id,
        );

        Ok(ApplicationResponse::from(&application))
    }

    /// Resume download by application id. A missing record is a 404 before
    /// any file read is attempted.
    #[instrument(skip(self))]
    pub async fn resume(&self, id: i64) -> ServiceResult<ResumeDownload> {
        let application = self
            .ctx
            .application_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Application", id.to_string()))?;

        let bytes = self.ctx.resume_store().load(&application.resume_path).await?;

        Ok(ResumeDownload {
            content_type: content_type_for(&application.resume_path),
            filename: download_filename(&application.full_name, &application.resume_path),
            bytes,
        })
    }
}
