//! PostgreSQL repository implementations

mod admin;
mod application;
mod appointment;
mod audit_log;
mod contact_message;
mod error;

pub use admin::PgAdminRepository;
pub use application::PgApplicationRepository;
pub use appointment::PgAppointmentRepository;
pub use audit_log::PgAuditLogRepository;
pub use contact_message::PgContactMessageRepository;
