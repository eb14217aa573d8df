use crate::{
    abstract_trait::EmailServiceTrait,
    config::EmailConfig,
    errors::ServiceError,
    utils::{EmailTemplateData, render_email},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    message::{Mailbox, Message},
    transport::smtp::authentication::Credentials,
};
use tracing::{error, info};

type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());

        let mailer = SmtpTransport::starttls_relay(&config.smtp_server)
            .context("Failed to create SMTP relay")?
            .credentials(creds)
            .port(config.smtp_port)
            .build();

        let from: Mailbox = "no-reply@quickbite.app"
            .parse()
            .context("Invalid sender email format")?;

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl EmailServiceTrait for EmailService {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        data: &EmailTemplateData,
    ) -> Result<(), ServiceError> {
        let body = render_email(data).map_err(|e| {
            error!("❌ Failed to render email template: {}", e);
            ServiceError::Notification(format!("Failed to render email template: {e}"))
        })?;

        let to_mailbox: Mailbox = to.parse().map_err(|e| {
            error!("❌ Invalid recipient email: {}", e);
            ServiceError::Notification(format!("Invalid recipient email: {e}"))
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(subject)
            .header(lettre::message::header::ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| {
                error!("❌ Failed to build email: {}", e);
                ServiceError::Notification(format!("Failed to build email: {e}"))
            })?;

        match self.mailer.send(email).await {
            Ok(_) => {
                info!("✅ Email sent to {to}");
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to send email to {to}: {e}");
                Err(ServiceError::Notification(format!(
                    "Failed to send email: {e}"
                )))
            }
        }
    }
}
