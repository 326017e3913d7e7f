//! # Notification Mailer
//!
//! Thin wrapper over an async SMTP transport. A send either succeeds or
//! surfaces a failure to the caller; there are no retries and no state is
//! rolled back on failure.

use eyre::Result;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::Mailbox,
    transport::smtp::authentication::Credentials,
};

use crate::config::SmtpConfig;

#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer").finish_non_exhaustive()
    }
}

impl Mailer {
    /// Builds a mailer from SMTP relay settings.
    pub fn from_config(config: &SmtpConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| eyre::eyre!("Invalid SMTP relay {}: {}", config.host, e))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport })
    }

    /// Sends a plain text email.
    pub async fn send(&self, from: &str, to: &str, subject: &str, text: &str) -> Result<()> {
        let message = Message::builder()
            .from(from.parse::<Mailbox>()?)
            .to(to.parse::<Mailbox>()?)
            .subject(subject)
            .body(text.to_string())?;

        self.transport.send(message).await?;

        tracing::info!("Email sent to {}", to);
        Ok(())
    }
}
