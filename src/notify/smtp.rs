use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::Config;
use crate::error::NotifyError;
use crate::notify::Mailer;

/// Sends the alert through an authenticated STARTTLS relay.
///
/// A fresh connection is opened for each message and closed afterwards.
pub struct SmtpMailer {
    host: String,
    port: u16,
    from_address: String,
    from_password: String,
    recipient: String,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            from_address: config.from_address.clone(),
            from_password: config.from_password.clone(),
            recipient: config.recipient_email.clone(),
        }
    }

    fn build_message(&self, subject: &str, html_body: String) -> Result<Message, NotifyError> {
        let message = Message::builder()
            .from(parse_mailbox(&self.from_address)?)
            .to(parse_mailbox(&self.recipient)?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)?;
        Ok(message)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address.parse().map_err(|source| NotifyError::Address {
        address: address.to_string(),
        source,
    })
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, subject: &str, html_body: String) -> Result<(), NotifyError> {
        let message = self.build_message(subject, html_body)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(
                self.from_address.clone(),
                self.from_password.clone(),
            ))
            .authentication(vec![Mechanism::Plain])
            .build();

        transport.send(message).await?;
        info!("Email sent to {} via {}:{}", self.recipient, self.host, self.port);
        Ok(())
    }
}
