//! # haven-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AdminProfile, ApplicationResponse, AppointmentResponse, AuditEntryResponse, HealthResponse,
    LoginRequest, LoginResponse, MessageResponse, OverviewResponse, ReadinessResponse,
    ReplyRequest, SubmissionResponse, SubmitApplicationRequest, SubmitAppointmentRequest,
    SubmitContactRequest, UpdateStatusRequest,
};
pub use services::{
    AppointmentService, ApplicationService, AuditRecorder, AuthService, ContactService, Mailer,
    OverviewService, ReplyFlow, ResumeDownload, ResumeStore, ResumeUpload, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
