use async_trait::async_trait;
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};

use crate::config::AgentConfig;
use crate::error::AgentError;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> Result<(), AgentError>;
}

/// SMTP delivery: STARTTLS upgrade on the configured port, plain credentials,
/// one fixed recipient. There is no fallback behind this; a send failure is
/// the end of the run.
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &AgentConfig) -> Result<Self, AgentError> {
        let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        let from: Mailbox = config.from_email.parse().map_err(
            |e: lettre::address::AddressError| AgentError::ConfigValue("FROM_EMAIL", e.to_string()),
        )?;
        let to: Mailbox = config.to_email.parse().map_err(
            |e: lettre::address::AddressError| AgentError::ConfigValue("TO_EMAIL", e.to_string()),
        )?;

        Ok(Self { mailer, from, to })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, subject: &str, body: &str) -> Result<(), AgentError> {
        let msg = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.mailer.send(msg).await?;
        tracing::info!(subject, bytes = body.len(), "email sent");
        Ok(())
    }
}
