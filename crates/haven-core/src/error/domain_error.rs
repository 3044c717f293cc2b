//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Appointment not found: {0}")]
    AppointmentNotFound(i64),

    #[error("Application not found: {0}")]
    ApplicationNotFound(i64),

    #[error("Message not found: {0}")]
    MessageNotFound(i64),

    #[error("Admin not found: {0}")]
    AdminNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid status '{value}' for {entity}")]
    InvalidStatus { entity: &'static str, value: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    UnsupportedMedia(String),

    #[error("File size exceeds {limit_mib}MB limit.")]
    FileTooLarge { limit_mib: u64 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::AppointmentNotFound(_) => "UNKNOWN_APPOINTMENT",
            Self::ApplicationNotFound(_) => "UNKNOWN_APPLICATION",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::AdminNotFound(_) => "UNKNOWN_ADMIN",
            Self::InvalidStatus { .. } => "INVALID_STATUS",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnsupportedMedia(_) => "UNSUPPORTED_MEDIA",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AppointmentNotFound(_)
                | Self::ApplicationNotFound(_)
                | Self::MessageNotFound(_)
                | Self::AdminNotFound(_)
        )
    }

    /// Check if this is a validation error (rejected before any write)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidStatus { .. }
                | Self::ValidationError(_)
                | Self::UnsupportedMedia(_)
                | Self::FileTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::AppointmentNotFound(1);
        assert_eq!(err.code(), "UNKNOWN_APPOINTMENT");

        let err = DomainError::InvalidStatus {
            entity: "appointment",
            value: "APPROVED".to_string(),
        };
        assert_eq!(err.code(), "INVALID_STATUS");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::MessageNotFound(7).is_not_found());
        assert!(DomainError::AdminNotFound(1).is_not_found());
        assert!(!DomainError::ValidationError("x".to_string()).is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::UnsupportedMedia("bad type".to_string()).is_validation());
        assert!(DomainError::FileTooLarge { limit_mib: 10 }.is_validation());
        assert!(!DomainError::DatabaseError("down".to_string()).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ApplicationNotFound(42);
        assert_eq!(err.to_string(), "Application not found: 42");

        let err = DomainError::InvalidStatus {
            entity: "contact message",
            value: "DECLINED".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid status 'DECLINED' for contact message");
    }
}
