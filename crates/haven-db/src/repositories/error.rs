//! Error handling utilities for repositories

use haven_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create an "appointment not found" error
pub fn appointment_not_found(id: i64) -> DomainError {
    DomainError::AppointmentNotFound(id)
}

/// Create an "application not found" error
pub fn application_not_found(id: i64) -> DomainError {
    DomainError::ApplicationNotFound(id)
}

/// Create a "message not found" error
pub fn message_not_found(id: i64) -> DomainError {
    DomainError::MessageNotFound(id)
}
