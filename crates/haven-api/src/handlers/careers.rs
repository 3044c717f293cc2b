//! Career application handlers
//!
//! Public multipart submission (form fields + resume file) plus the
//! authenticated admin lifecycle and resume download.

use axum::{
    extract::{multipart::Multipart, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use haven_service::{
    ApplicationResponse, ApplicationService, ResumeUpload, SubmissionResponse,
    SubmitApplicationRequest, UpdateStatusRequest,
};

use crate::extractors::AdminUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

use super::StatusQuery;

/// Submit a career application (public, multipart)
///
/// POST /careers/apply
pub async fn submit_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<SubmissionResponse>> {
    let mut full_name = String::new();
    let mut email = String::new();
    let mut phone = String::new();
    let mut position = String::new();
    let mut cover_letter: Option<String> = None;
    let mut resume: Option<ResumeUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "full_name" => full_name = read_text(field).await?,
            "email" => email = read_text(field).await?,
            "phone" => phone = read_text(field).await?,
            "position" => position = read_text(field).await?,
            "cover_letter" => {
                let text = read_text(field).await?;
                cover_letter = (!text.is_empty()).then_some(text);
            }
            "resume" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_body(e.to_string()))?;
                resume = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let request = SubmitApplicationRequest {
        full_name,
        email,
        phone,
        position,
        cover_letter,
    };
    request.validate()?;

    let resume = resume.ok_or_else(|| ApiError::invalid_body("Resume file is required"))?;

    let service = ApplicationService::new(state.service_context());
    let response = service.submit(request, resume).await?;
    Ok(Json(response))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::invalid_body(e.to_string()))
}

/// List career applications, optionally filtered by status
///
/// GET /admin/careers?status=
pub async fn list_applications(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    let service = ApplicationService::new(state.service_context());
    let applications = service.list(query.status.as_deref()).await?;
    Ok(Json(applications))
}

/// Get a single career application
///
/// GET /admin/careers/{application_id}
pub async fn get_application(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(application_id): Path<i64>,
) -> ApiResult<Json<ApplicationResponse>> {
    let service = ApplicationService::new(state.service_context());
    let application = service.get(application_id).await?;
    Ok(Json(application))
}

/// Update career application status
///
/// PUT /admin/careers/{application_id}
pub async fn update_application_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(application_id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Json<ApplicationResponse>> {
    let service = ApplicationService::new(state.service_context());
    let application = service
        .update_status(admin.id, application_id, request)
        .await?;
    Ok(Json(application))
}

/// Download the resume for an application
///
/// GET /admin/careers/{application_id}/resume
pub async fn download_resume(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(application_id): Path<i64>,
) -> ApiResult<Response> {
    let service = ApplicationService::new(state.service_context());
    let download = service.resume(application_id).await?;

    let headers = [
        (header::CONTENT_TYPE, download.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download.filename),
        ),
    ];

    Ok((headers, download.bytes).into_response())
}
