//! Contact message handlers
//!
//! Public submission plus the authenticated admin lifecycle endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use haven_service::{
    ContactService, MessageResponse, ReplyRequest, SubmissionResponse, SubmitContactRequest,
    UpdateStatusRequest,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

use super::StatusQuery;

/// Submit a contact message (public)
///
/// POST /contact
pub async fn submit_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitContactRequest>,
) -> ApiResult<Json<SubmissionResponse>> {
    let service = ContactService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Json(response))
}

/// List contact messages, optionally filtered by status
///
/// GET /admin/messages?status=
pub async fn list_messages(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = ContactService::new(state.service_context());
    let messages = service.list(query.status.as_deref()).await?;
    Ok(Json(messages))
}

/// Get a single contact message
///
/// GET /admin/messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(message_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ContactService::new(state.service_context());
    let message = service.get(message_id).await?;
    Ok(Json(message))
}

/// Update contact message status
///
/// PUT /admin/messages/{message_id}
pub async fn update_message_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(message_id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ContactService::new(state.service_context());
    let message = service.update_status(admin.id, message_id, request).await?;
    Ok(Json(message))
}

/// Reply to a contact message
///
/// POST /admin/messages/{message_id}/reply
pub async fn reply_to_message(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(message_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<ReplyRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ContactService::new(state.service_context());
    let message = service.reply(admin.id, message_id, request).await?;
    Ok(Json(message))
}
