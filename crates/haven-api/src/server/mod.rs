//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use haven_common::{AppConfig, AppError, TokenService};
use haven_db::{
    create_pool, PgAdminRepository, PgAppointmentRepository, PgApplicationRepository,
    PgAuditLogRepository, PgContactMessageRepository,
};
use haven_service::{Mailer, ResumeStore, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
/// Health routes are mounted outside the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    health_routes().merge(router).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = haven_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create the token service
    let token_service = Arc::new(TokenService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    // Create the mailer (log-only when SMTP is unconfigured)
    let mailer = Arc::new(
        Mailer::new(&config.smtp).map_err(|e| AppError::Config(e.to_string()))?,
    );
    if !mailer.is_configured() {
        info!("SMTP not configured; notification emails will be logged only");
    }

    // Create the resume store
    let resume_store = Arc::new(ResumeStore::new(
        config.storage.upload_dir.clone(),
        config.storage.max_file_size_mb,
    ));

    // Create repositories
    let admin_repo = Arc::new(PgAdminRepository::new(pool.clone()));
    let appointment_repo = Arc::new(PgAppointmentRepository::new(pool.clone()));
    let application_repo = Arc::new(PgApplicationRepository::new(pool.clone()));
    let message_repo = Arc::new(PgContactMessageRepository::new(pool.clone()));
    let audit_repo = Arc::new(PgAuditLogRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .admin_repo(admin_repo)
        .appointment_repo(appointment_repo)
        .application_repo(application_repo)
        .message_repo(message_repo)
        .audit_repo(audit_repo)
        .token_service(token_service)
        .mailer(mailer)
        .resume_store(resume_store)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
