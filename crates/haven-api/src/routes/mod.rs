//! Route definitions
//!
//! All API routes organized by audience and mounted under /api/v1.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers::{appointments, auth, careers, health, messages, overview};
use crate::state::AppState;

/// Multipart body ceiling for resume uploads. Slightly above the 10 MiB
/// file limit so the store's own validation produces the rejection message.
const UPLOAD_BODY_LIMIT: usize = 12 * 1024 * 1024;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .nest("/admin", admin_routes())
}

/// Public submission routes (unauthenticated)
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(appointments::submit_appointment))
        .route("/contact", post(messages::submit_message))
        .route(
            "/careers/apply",
            post(careers::submit_application).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}

/// Admin routes (bearer-token authenticated via the AdminUser extractor)
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/overview", get(overview::overview))
        // Appointments
        .route("/appointments", get(appointments::list_appointments))
        .route(
            "/appointments/:appointment_id",
            get(appointments::get_appointment).put(appointments::update_appointment_status),
        )
        .route(
            "/appointments/:appointment_id/reply",
            post(appointments::reply_to_appointment),
        )
        // Career applications
        .route("/careers", get(careers::list_applications))
        .route(
            "/careers/:application_id",
            get(careers::get_application).put(careers::update_application_status),
        )
        .route(
            "/careers/:application_id/resume",
            get(careers::download_resume),
        )
        // Contact messages
        .route("/messages", get(messages::list_messages))
        .route(
            "/messages/:message_id",
            get(messages::get_message).put(messages::update_message_status),
        )
        .route("/messages/:message_id/reply", post(messages::reply_to_message))
}
