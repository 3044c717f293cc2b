//! Domain entities

mod admin;
mod application;
mod appointment;
mod audit;
mod contact_message;

pub use admin::Administrator;
pub use application::{ApplicationStatus, CareerApplication, NewApplication};
pub use appointment::{Appointment, AppointmentStatus, NewAppointment};
pub use audit::{AuditLogEntry, AuditLogWithAdmin, NewAuditEntry};
pub use contact_message::{ContactMessage, MessageStatus, NewContactMessage};
