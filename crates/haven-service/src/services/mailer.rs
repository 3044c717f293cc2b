//! Notification sink - best-effort outbound email
//!
//! Uses SMTP via lettre when configured. When SMTP settings are absent the
//! message is logged instead of sent and the send reports success, so
//! submission and reply flows never fail on notification delivery.

use lettre::{
    message::{header::ContentType, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};

use haven_common::config::SmtpConfig;

/// Which flow triggered an admin reply; only the wording differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFlow {
    Appointment,
    Contact,
}

impl ReplyFlow {
    fn subject(self) -> &'static str {
        match self {
            Self::Appointment => "Response from HavenBridge Home Care - Your Appointment",
            Self::Contact => "Response from HavenBridge Home Care - Your Message",
        }
    }
}

/// Best-effort email sender
#[derive(Clone)]
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from_address: String,
}

impl Mailer {
    /// Create a mailer from configuration. Missing SMTP settings switch the
    /// mailer to log-only mode rather than failing startup.
    ///
    /// # Errors
    /// Returns an error if the configured relay host cannot be parsed.
    pub fn new(config: &SmtpConfig) -> Result<Self, lettre::transport::smtp::Error> {
        let transport = if config.is_configured() {
            let host = config.host.as_deref().unwrap_or_default();
            let credentials = Credentials::new(
                config.username.clone().unwrap_or_default(),
                config.password.clone().unwrap_or_default(),
            );

            Some(
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
                    .port(config.port)
                    .credentials(credentials)
                    .build(),
            )
        } else {
            None
        };

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }

    /// Whether real delivery is attempted (false = log-only mode)
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    /// Send an email, best-effort. Returns whether the message was handed
    /// off (log-only mode counts as success); failures are logged, never
    /// propagated.
    pub async fn send(&self, to: &str, subject: &str, text: &str, html: &str) -> bool {
        let Some(transport) = &self.transport else {
            info!(to = %to, subject = %subject, "SMTP not configured; logging email instead of sending");
            return true;
        };

        let message = Message::builder()
            .from(match self.from_address.parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    error!(error = %e, from = %self.from_address, "Invalid sender address");
                    return false;
                }
            })
            .to(match to.parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    error!(error = %e, to = %to, "Invalid recipient address");
                    return false;
                }
            })
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html.to_string()),
                    ),
            );

        let message = match message {
            Ok(message) => message,
            Err(e) => {
                error!(error = %e, "Failed to build email message");
                return false;
            }
        };

        match transport.send(message).await {
            Ok(_) => {
                info!(to = %to, subject = %subject, "Email sent successfully");
                true
            }
            Err(e) => {
                error!(error = %e, to = %to, "Error sending email");
                false
            }
        }
    }

    /// Submission acknowledgement for a new appointment request
    pub async fn send_appointment_confirmation(
        &self,
        to: &str,
        full_name: &str,
        date: &str,
        time: &str,
    ) -> bool {
        let subject = "Appointment Request Received - HavenBridge Home Care";
        let text = format!(
            "Dear {full_name},\n\n\
             Thank you for requesting an appointment with HavenBridge Home Care. \
             We have received your request and will review it shortly.\n\n\
             Requested Date: {date}\n\
             Requested Time: {time}\n\n\
             One of our team members will contact you within 24-48 hours to confirm \
             your appointment.\n\n\
             Best regards,\nHavenBridge Home Care Team"
        );
        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #0284c7;">Appointment Request Received</h2>
  <p>Dear {full_name},</p>
  <p>Thank you for requesting an appointment with HavenBridge Home Care. We have received your request and will review it shortly.</p>
  <div style="background-color: #f0f9ff; padding: 15px; border-radius: 5px; margin: 20px 0;">
    <p><strong>Requested Date:</strong> {date}</p>
    <p><strong>Requested Time:</strong> {time}</p>
  </div>
  <p>One of our team members will contact you within 24-48 hours to confirm your appointment.</p>
  <p>Best regards,<br>HavenBridge Home Care Team</p>
</div>"#
        );

        self.send(to, subject, &text, &html).await
    }

    /// Admin reply notification, for both appointment and contact flows
    pub async fn send_admin_reply(
        &self,
        to: &str,
        full_name: &str,
        reply: &str,
        flow: ReplyFlow,
    ) -> bool {
        let subject = flow.subject();
        let text = format!(
            "Dear {full_name},\n\n{reply}\n\n\
             If you have any questions, please don't hesitate to contact us.\n\n\
             Best regards,\nHavenBridge Home Care Team"
        );
        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #0284c7;">Message from HavenBridge Home Care</h2>
  <p>Dear {full_name},</p>
  <div style="background-color: #f0f9ff; padding: 15px; border-radius: 5px; margin: 20px 0;">
    {reply}
  </div>
  <p>If you have any questions, please don't hesitate to contact us.</p>
  <p>Best regards,<br>HavenBridge Home Care Team</p>
</div>"#
        );

        self.send(to, subject, &text, &html).await
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("configured", &self.is_configured())
            .field("from_address", &self.from_address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> Mailer {
        let config = SmtpConfig {
            host: None,
            port: 587,
            username: None,
            password: None,
            from_address: "no-reply@havenbridge.example".to_string(),
        };
        Mailer::new(&config).unwrap()
    }

    #[test]
    fn test_unconfigured_mailer_is_log_only() {
        assert!(!unconfigured().is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_send_reports_success() {
        let mailer = unconfigured();
        assert!(mailer.send("jane@x.com", "Subject", "text", "<p>html</p>").await);
    }

    #[tokio::test]
    async fn test_confirmation_template_reports_success_unconfigured() {
        let mailer = unconfigured();
        assert!(
            mailer
                .send_appointment_confirmation("jane@x.com", "Jane Doe", "2025-06-01", "10:00")
                .await
        );
    }

    #[test]
    fn test_reply_flow_wording_differs() {
        assert_ne!(
            ReplyFlow::Appointment.subject(),
            ReplyFlow::Contact.subject()
        );
    }
}
