//! Status lifecycle machinery shared by all request kinds
//!
//! Each request entity carries a finite status enumeration with a fixed
//! initial value and a set of terminal values. Transitions are triggered by
//! admin actions only; nothing here removes a record or reverts it to its
//! initial status.

use std::fmt;

use crate::error::DomainError;

/// Common behavior of a request status enumeration.
pub trait RequestStatus:
    Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Entity label used in error messages and audit entries.
    const ENTITY: &'static str;

    /// Every member of the enumeration.
    fn all() -> &'static [Self];

    /// Status assigned at creation.
    fn initial() -> Self;

    /// Whether no further transition is expected from this status.
    fn is_terminal(self) -> bool;

    /// Canonical stored representation (SCREAMING_SNAKE_CASE).
    fn as_str(self) -> &'static str;

    /// Parse the canonical representation, rejecting anything outside the
    /// entity's own enumeration.
    fn parse(value: &str) -> Result<Self, DomainError> {
        Self::all()
            .iter()
            .find(|s| s.as_str() == value)
            .copied()
            .ok_or_else(|| DomainError::InvalidStatus {
                entity: Self::ENTITY,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{AppointmentStatus, ApplicationStatus, MessageStatus};
    use crate::RequestStatus;

    #[test]
    fn test_round_trip_all_statuses() {
        for s in AppointmentStatus::all() {
            assert_eq!(AppointmentStatus::parse(s.as_str()).unwrap(), *s);
        }
        for s in ApplicationStatus::all() {
            assert_eq!(ApplicationStatus::parse(s.as_str()).unwrap(), *s);
        }
        for s in MessageStatus::all() {
            assert_eq!(MessageStatus::parse(s.as_str()).unwrap(), *s);
        }
    }

    #[test]
    fn test_parse_rejects_foreign_values() {
        // Values from the other entities' lifecycles must not leak across.
        assert!(AppointmentStatus::parse("SHORTLISTED").is_err());
        assert!(ApplicationStatus::parse("CONFIRMED").is_err());
        assert!(MessageStatus::parse("PENDING").is_err());
        // Values from no lifecycle at all.
        assert!(AppointmentStatus::parse("APPROVED").is_err());
        assert!(ApplicationStatus::parse("DECLINED").is_err());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(AppointmentStatus::parse("pending").is_err());
        assert!(AppointmentStatus::parse("Pending").is_err());
    }

    #[test]
    fn test_initial_statuses() {
        assert_eq!(AppointmentStatus::initial(), AppointmentStatus::Pending);
        assert_eq!(ApplicationStatus::initial(), ApplicationStatus::New);
        assert_eq!(MessageStatus::initial(), MessageStatus::Unread);
    }

    #[test]
    fn test_initial_is_never_terminal() {
        assert!(!AppointmentStatus::initial().is_terminal());
        assert!(!ApplicationStatus::initial().is_terminal());
        assert!(!MessageStatus::initial().is_terminal());
    }
}
