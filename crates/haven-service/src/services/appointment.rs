//! Appointment service
//!
//! Public submission plus the admin lifecycle: list, get, status
//! transitions, and replies. Mutations write an audit entry; notifications
//! go out as detached tasks and never gate the response.

use tracing::{info, instrument, warn};

use haven_core::entities::{AppointmentStatus, NewAppointment};
use haven_core::lifecycle::RequestStatus;
use haven_core::traits::{ReplyRepository, RequestRepository};

use crate::dto::{
    AppointmentResponse, ReplyRequest, SubmissionResponse, SubmitAppointmentRequest,
    UpdateStatusRequest,
};

use super::audit::ENTITY_APPOINTMENT;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::mailer::ReplyFlow;

/// Appointment service
pub struct AppointmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AppointmentService<'a> {
    /// Create a new AppointmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public submission. Persists with status PENDING and fires a
    /// confirmation email without awaiting delivery.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn submit(
        &self,
        request: SubmitAppointmentRequest,
    ) -> ServiceResult<SubmissionResponse> {
        let preferred_date = request
            .preferred_date()
            .map_err(|_| ServiceError::validation("Date must be in YYYY-MM-DD format"))?;
        let draft = NewAppointment {
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
            service_type: request.service_type,
            preferred_date,
            preferred_time: request.preferred_time,
            message: request.message,
        };

        let appointment = self.ctx.appointment_repo().insert(draft).await?;

        info!(appointment_id = appointment.id, "Appointment request created");

        let mailer = self.ctx.mailer();
        let to = appointment.email.clone();
        let name = appointment.full_name.clone();
        let date = appointment.preferred_date.to_string();
        let time = appointment.preferred_time.clone();
        tokio::spawn(async move {
            if !mailer
                .send_appointment_confirmation(&to, &name, &date, &time)
                .await
            {
                warn!(to = %to, "Appointment confirmation email was not delivered");
            }
        });

        Ok(SubmissionResponse::new(
            appointment.id,
            "Appointment request submitted successfully",
        ))
    }

    /// List appointments, optionally filtered by a status string
    #[instrument(skip(self))]
    pub async fn list(&self, status: Option<&str>) -> ServiceResult<Vec<AppointmentResponse>> {
        let filter = status.map(AppointmentStatus::parse).transpose()?;

        let appointments = self.ctx.appointment_repo().list(filter).await?;
        Ok(appointments.iter().map(AppointmentResponse::from).collect())
    }

    /// Fetch a single appointment
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<AppointmentResponse> {
        let appointment = self
            .ctx
            .appointment_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Appointment", id.to_string()))?;

        Ok(AppointmentResponse::from(&appointment))
    }

    /// Admin status transition. The status string is parsed against the
    /// appointment lifecycle; anything else is rejected with no write.
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        admin_id: i64,
        id: i64,
        request: UpdateStatusRequest,
    ) -> ServiceResult<AppointmentResponse> {
        let status = AppointmentStatus::parse(&request.status)?;

        let appointment = self.ctx.appointment_repo().update_status(id, status).await?;

        self.ctx.audit().record(
            admin_id,
            format!("Updated appointment status to {status}"),
            ENTITY_APPOINTMENT,
            id,
        );

        Ok(AppointmentResponse::from(&appointment))
    }

    /// Admin reply. Stores the reply, audits the action, and emails the
    /// submitter without awaiting delivery.
    #[instrument(skip(self, request))]
    pub async fn reply(
        &self,
        admin_id: i64,
        id: i64,
        request: ReplyRequest,
    ) -> ServiceResult<AppointmentResponse> {
        let appointment = self
            .ctx
            .appointment_repo()
            .set_reply(id, &request.reply)
            .await?;

        self.ctx
            .audit()
            .record(admin_id, "Replied to appointment", ENTITY_APPOINTMENT, id);

        let mailer = self.ctx.mailer();
        let to = appointment.email.clone();
        let name = appointment.full_name.clone();
        let reply = request.reply;
        tokio::spawn(async move {
            if !mailer
                .send_admin_reply(&to, &name, &reply, ReplyFlow::Appointment)
                .await
            {
                warn!(to = %to, "Appointment reply email was not delivered");
            }
        });

        Ok(AppointmentResponse::from(&appointment))
    }
}
