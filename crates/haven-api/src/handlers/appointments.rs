//! Appointment handlers
//!
//! Public submission plus the authenticated admin lifecycle endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use haven_service::{
    AppointmentResponse, AppointmentService, ReplyRequest, SubmissionResponse,
    SubmitAppointmentRequest, UpdateStatusRequest,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

use super::StatusQuery;

/// Submit an appointment request (public)
///
/// POST /appointments
pub async fn submit_appointment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitAppointmentRequest>,
) -> ApiResult<Json<SubmissionResponse>> {
    let service = AppointmentService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Json(response))
}

/// List appointments, optionally filtered by status
///
/// GET /admin/appointments?status=
pub async fn list_appointments(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<Vec<AppointmentResponse>>> {
    let service = AppointmentService::new(state.service_context());
    let appointments = service.list(query.status.as_deref()).await?;
    Ok(Json(appointments))
}

/// Get a single appointment
///
/// GET /admin/appointments/{appointment_id}
pub async fn get_appointment(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(appointment_id): Path<i64>,
) -> ApiResult<Json<AppointmentResponse>> {
    let service = AppointmentService::new(state.service_context());
    let appointment = service.get(appointment_id).await?;
    Ok(Json(appointment))
}

/// Update appointment status
///
/// PUT /admin/appointments/{appointment_id}
pub async fn update_appointment_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(appointment_id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    let service = AppointmentService::new(state.service_context());
    let appointment = service
        .update_status(admin.id, appointment_id, request)
        .await?;
    Ok(Json(appointment))
}

/// Reply to an appointment request
///
/// POST /admin/appointments/{appointment_id}/reply
pub async fn reply_to_appointment(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(appointment_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<ReplyRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    let service = AppointmentService::new(state.service_context());
    let appointment = service.reply(admin.id, appointment_id, request).await?;
    Ok(Json(appointment))
}
