//! Model → entity mappers
//!
//! Status columns are stored as TEXT; conversion parses them through the
//! entity's own enumeration, so a corrupted row surfaces as a database error
//! instead of a bogus status.

use haven_core::{
    Administrator, Appointment, AppointmentStatus, ApplicationStatus, AuditLogEntry,
    AuditLogWithAdmin, CareerApplication, ContactMessage, DomainError, MessageStatus,
    RequestStatus,
};

use crate::models::{
    AdminModel, ApplicationModel, AppointmentModel, AuditLogModel, AuditLogWithAdminModel,
    ContactMessageModel,
};

fn parse_status<S: RequestStatus>(value: &str) -> Result<S, DomainError> {
    S::parse(value).map_err(|_| {
        DomainError::DatabaseError(format!(
            "invalid stored status '{value}' for {}",
            S::ENTITY
        ))
    })
}

impl From<AdminModel> for Administrator {
    fn from(model: AdminModel) -> Self {
        Self {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            role: model.role,
            last_login: model.last_login,
            created_at: model.created_at,
        }
    }
}

impl TryFrom<AppointmentModel> for Appointment {
    type Error = DomainError;

    fn try_from(model: AppointmentModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            service_type: model.service_type,
            preferred_date: model.preferred_date,
            preferred_time: model.preferred_time,
            message: model.message,
            status: parse_status::<AppointmentStatus>(&model.status)?,
            admin_reply: model.admin_reply,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<ApplicationModel> for CareerApplication {
    type Error = DomainError;

    fn try_from(model: ApplicationModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            position: model.position,
            cover_letter: model.cover_letter,
            resume_path: model.resume_path,
            status: parse_status::<ApplicationStatus>(&model.status)?,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<ContactMessageModel> for ContactMessage {
    type Error = DomainError;

    fn try_from(model: ContactMessageModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            subject: model.subject,
            message: model.message,
            status: parse_status::<MessageStatus>(&model.status)?,
            admin_reply: model.admin_reply,
            created_at: model.created_at,
            replied_at: model.replied_at,
        })
    }
}

impl From<AuditLogModel> for AuditLogEntry {
    fn from(model: AuditLogModel) -> Self {
        Self {
            id: model.id,
            admin_id: model.admin_id,
            action: model.action,
            entity_type: model.entity_type,
            entity_id: model.entity_id,
            created_at: model.created_at,
        }
    }
}

impl From<AuditLogWithAdminModel> for AuditLogWithAdmin {
    fn from(model: AuditLogWithAdminModel) -> Self {
        Self {
            entry: AuditLogEntry {
                id: model.id,
                admin_id: model.admin_id,
                action: model.action,
                entity_type: model.entity_type,
                entity_id: model.entity_id,
                created_at: model.created_at,
            },
            admin_name: model.admin_name,
            admin_email: model.admin_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_appointment_status_parse_failure_is_database_error() {
        let model = AppointmentModel {
            id: 1,
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "5551234567".to_string(),
            service_type: "Personal Care".to_string(),
            preferred_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            preferred_time: "10:00".to_string(),
            message: "Need help with daily tasks".to_string(),
            status: "APPROVED".to_string(),
            admin_reply: None,
            created_at: Utc::now(),
        };

        let result = Appointment::try_from(model);
        assert!(matches!(result, Err(DomainError::DatabaseError(_))));
    }

    #[test]
    fn test_contact_message_maps_cleanly() {
        let now = Utc::now();
        let model = ContactMessageModel {
            id: 3,
            full_name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            subject: "Service areas".to_string(),
            message: "Do you cover the north side?".to_string(),
            status: "UNREAD".to_string(),
            admin_reply: None,
            created_at: now,
            replied_at: None,
        };

        let message = ContactMessage::try_from(model).unwrap();
        assert_eq!(message.status, MessageStatus::Unread);
        assert_eq!(message.created_at, now);
    }
}
