//! Application services

mod appointment;
mod application;
mod audit;
mod auth;
mod contact;
mod context;
mod error;
mod files;
mod mailer;
mod overview;

pub use appointment::AppointmentService;
pub use application::{ApplicationService, ResumeDownload};
pub use audit::AuditRecorder;
pub use auth::AuthService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use files::{ResumeStore, ResumeUpload};
pub use mailer::{Mailer, ReplyFlow};
pub use overview::OverviewService;
