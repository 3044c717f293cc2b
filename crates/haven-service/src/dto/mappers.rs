//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use haven_core::entities::{
    Administrator, Appointment, AuditLogWithAdmin, CareerApplication, ContactMessage,
};

use super::responses::{
    AdminProfile, ApplicationResponse, AppointmentResponse, AuditEntryResponse, MessageResponse,
};

impl From<&Administrator> for AdminProfile {
    fn from(admin: &Administrator) -> Self {
        Self {
            id: admin.id,
            full_name: admin.full_name.clone(),
            email: admin.email.clone(),
            role: admin.role.clone(),
        }
    }
}

impl From<Administrator> for AdminProfile {
    fn from(admin: Administrator) -> Self {
        Self::from(&admin)
    }
}

impl From<&Appointment> for AppointmentResponse {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id,
            full_name: appointment.full_name.clone(),
            email: appointment.email.clone(),
            phone: appointment.phone.clone(),
            service_type: appointment.service_type.clone(),
            preferred_date: appointment.preferred_date,
            preferred_time: appointment.preferred_time.clone(),
            message: appointment.message.clone(),
            status: appointment.status,
            admin_reply: appointment.admin_reply.clone(),
            created_at: appointment.created_at,
        }
    }
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self::from(&appointment)
    }
}

impl From<&CareerApplication> for ApplicationResponse {
    fn from(application: &CareerApplication) -> Self {
        Self {
            id: application.id,
            full_name: application.full_name.clone(),
            email: application.email.clone(),
            phone: application.phone.clone(),
            position: application.position.clone(),
            cover_letter: application.cover_letter.clone(),
            resume_path: application.resume_path.clone(),
            status: application.status,
            created_at: application.created_at,
        }
    }
}

impl From<CareerApplication> for ApplicationResponse {
    fn from(application: CareerApplication) -> Self {
        Self::from(&application)
    }
}

impl From<&ContactMessage> for MessageResponse {
    fn from(message: &ContactMessage) -> Self {
        Self {
            id: message.id,
            full_name: message.full_name.clone(),
            email: message.email.clone(),
            phone: message.phone.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            status: message.status,
            admin_reply: message.admin_reply.clone(),
            created_at: message.created_at,
            replied_at: message.replied_at,
        }
    }
}

impl From<ContactMessage> for MessageResponse {
    fn from(message: ContactMessage) -> Self {
        Self::from(&message)
    }
}

impl From<&AuditLogWithAdmin> for AuditEntryResponse {
    fn from(audit: &AuditLogWithAdmin) -> Self {
        Self {
            id: audit.entry.id,
            admin_id: audit.entry.admin_id,
            admin_name: audit.admin_name.clone(),
            admin_email: audit.admin_email.clone(),
            action: audit.entry.action.clone(),
            entity_type: audit.entry.entity_type.clone(),
            entity_id: audit.entry.entity_id,
            created_at: audit.entry.created_at,
        }
    }
}

impl From<AuditLogWithAdmin> for AuditEntryResponse {
    fn from(audit: AuditLogWithAdmin) -> Self {
        Self::from(&audit)
    }
}
