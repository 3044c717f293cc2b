//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use requests::{
    LoginRequest, ReplyRequest, SubmitApplicationRequest, SubmitAppointmentRequest,
    SubmitContactRequest, UpdateStatusRequest,
};
pub use responses::{
    AdminProfile, ApplicationResponse, AppointmentCounts, ApplicationCounts, AppointmentResponse,
    AuditEntryResponse, HealthResponse, LoginResponse, MessageCounts, MessageResponse,
    OverviewResponse, OverviewStats, ReadinessResponse, SubmissionResponse,
};
