//! Overview service - read-only dashboard aggregation
//!
//! Counts per status per entity kind, the most recent items still waiting
//! for attention, and the latest audit activity. No side effects.

use tracing::instrument;

use haven_core::entities::{AppointmentStatus, ApplicationStatus, MessageStatus};
use haven_core::traits::{AuditLogRepository, RequestRepository};

use crate::dto::{
    ApplicationCounts, ApplicationResponse, AppointmentCounts, AppointmentResponse,
    AuditEntryResponse, MessageCounts, OverviewResponse, OverviewStats,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// How many recent pending items to surface per kind
const RECENT_ITEMS: i64 = 5;
/// How many audit entries to surface
const RECENT_ACTIVITY: i64 = 10;

/// Overview service
pub struct OverviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OverviewService<'a> {
    /// Create a new OverviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the dashboard overview
    #[instrument(skip(self))]
    pub async fn overview(&self) -> ServiceResult<OverviewResponse> {
        let appointments = self.ctx.appointment_repo();
        let applications = self.ctx.application_repo();
        let messages = self.ctx.message_repo();

        let stats = OverviewStats {
            appointments: AppointmentCounts {
                total: appointments.count(None).await?,
                pending: appointments.count(Some(AppointmentStatus::Pending)).await?,
                confirmed: appointments.count(Some(AppointmentStatus::Confirmed)).await?,
                completed: appointments.count(Some(AppointmentStatus::Completed)).await?,
                cancelled: appointments.count(Some(AppointmentStatus::Cancelled)).await?,
            },
            applications: ApplicationCounts {
                total: applications.count(None).await?,
                new: applications.count(Some(ApplicationStatus::New)).await?,
                reviewing: applications.count(Some(ApplicationStatus::Reviewing)).await?,
                shortlisted: applications
                    .count(Some(ApplicationStatus::Shortlisted))
                    .await?,
                rejected: applications.count(Some(ApplicationStatus::Rejected)).await?,
            },
            messages: MessageCounts {
                total: messages.count(None).await?,
                unread: messages.count(Some(MessageStatus::Unread)).await?,
                read: messages.count(Some(MessageStatus::Read)).await?,
                replied: messages.count(Some(MessageStatus::Replied)).await?,
            },
        };

        let recent_appointments = appointments
            .recent(Some(AppointmentStatus::Pending), RECENT_ITEMS)
            .await?
            .iter()
            .map(AppointmentResponse::from)
            .collect();

        let recent_applications = applications
            .recent(Some(ApplicationStatus::New), RECENT_ITEMS)
            .await?
            .iter()
            .map(ApplicationResponse::from)
            .collect();

        let recent_activity = self
            .ctx
            .audit_repo()
            .recent(RECENT_ACTIVITY)
            .await?
            .iter()
            .map(AuditEntryResponse::from)
            .collect();

        Ok(OverviewResponse {
            success: true,
            stats,
            recent_appointments,
            recent_applications,
            recent_activity,
        })
    }
}
