//! Database models (rows as stored, statuses as raw TEXT)

mod admin;
mod application;
mod appointment;
mod audit_log;
mod contact_message;

pub use admin::AdminModel;
pub use application::ApplicationModel;
pub use appointment::AppointmentModel;
pub use audit_log::{AuditLogModel, AuditLogWithAdminModel};
pub use contact_message::ContactMessageModel;
