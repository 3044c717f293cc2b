//! Contact message service
//!
//! Public submission plus the admin lifecycle: list, get, status
//! transitions, and replies with notification.

use tracing::{info, instrument, warn};

use haven_core::entities::{MessageStatus, NewContactMessage};
use haven_core::lifecycle::RequestStatus;
use haven_core::traits::{ReplyRepository, RequestRepository};

use crate::dto::{
    MessageResponse, ReplyRequest, SubmissionResponse, SubmitContactRequest, UpdateStatusRequest,
};

use super::audit::ENTITY_MESSAGE;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::mailer::ReplyFlow;

/// Contact message service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    /// Create a new ContactService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public submission, persisted as UNREAD
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn submit(&self, request: SubmitContactRequest) -> ServiceResult<SubmissionResponse> {
        let draft = NewContactMessage {
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
            subject: request.subject,
            message: request.message,
        };

        let message = self.ctx.message_repo().insert(draft).await?;

        info!(message_id = message.id, "Contact message created");

        Ok(SubmissionResponse::new(message.id, "Message sent successfully"))
    }

    /// List messages, optionally filtered by a status string
    #[instrument(skip(self))]
    pub async fn list(&self, status: Option<&str>) -> ServiceResult<Vec<MessageResponse>> {
        let filter = status.map(MessageStatus::parse).transpose()?;

        let messages = self.ctx.message_repo().list(filter).await?;
        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Fetch a single message
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<MessageResponse> {
        let message = self
            .ctx
            .message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", id.to_string()))?;

        Ok(MessageResponse::from(&message))
    }

    /// Admin status transition, validated against the message lifecycle
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        admin_id: i64,
        id: i64,
        request: UpdateStatusRequest,
    ) -> ServiceResult<MessageResponse> {
        let status = MessageStatus::parse(&request.status)?;

        let message = self.ctx.message_repo().update_status(id, status).await?;

        self.ctx.audit().record(
            admin_id,
            format!("Updated message status to {status}"),
            ENTITY_MESSAGE,
            id,
        );

        Ok(MessageResponse::from(&message))
    }

    /// Admin reply. The store write stamps replied_at and forces REPLIED;
    /// audit and notification are detached side effects.
    #[instrument(skip(self, request))]
    pub async fn reply(
        &self,
        admin_id: i64,
        id: i64,
        request: ReplyRequest,
    ) -> ServiceResult<MessageResponse> {
        let message = self.ctx.message_repo().set_reply(id, &request.reply).await?;

        self.ctx
            .audit()
            .record(admin_id, "Replied to contact message", ENTITY_MESSAGE, id);

        let mailer = self.ctx.mailer();
        let to = message.email.clone();
        let name = message.full_name.clone();
        let reply = request.reply;
        tokio::spawn(async move {
            if !mailer
                .send_admin_reply(&to, &name, &reply, ReplyFlow::Contact)
                .await
            {
                warn!(to = %to, "Contact reply email was not delivered");
            }
        });

        Ok(MessageResponse::from(&message))
    }
}
