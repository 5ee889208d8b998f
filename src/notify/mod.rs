mod smtp;
mod template;

pub use smtp::SmtpMailer;
pub use template::TeraRenderer;

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;
use crate::models::NotificationPayload;

/// Turns a payload into an HTML email body.
pub trait Renderer {
    fn render(&self, payload: &NotificationPayload) -> Result<String, NotifyError>;
}

/// Delivers one HTML message to the configured recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, subject: &str, html_body: String) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing qualified; no email was rendered or sent.
    Quiet,
    Sent { queries: usize, shoes: usize },
}

/// Renders and sends a single alert, or does nothing when the payload is empty.
pub async fn notify<R, M>(
    payload: &NotificationPayload,
    renderer: &R,
    mailer: &M,
    subject: &str,
) -> Result<Outcome, NotifyError>
where
    R: Renderer + ?Sized,
    M: Mailer + ?Sized,
{
    if payload.is_empty() {
        info!("No shoes at or below threshold; skipping email");
        return Ok(Outcome::Quiet);
    }

    let body = renderer.render(payload)?;
    mailer.send(subject, body).await?;

    let outcome = Outcome::Sent {
        queries: payload.len(),
        shoes: payload.qualifying_count(),
    };
    info!(
        "Sent alert covering {} queries and {} shoes",
        payload.len(),
        payload.qualifying_count()
    );
    Ok(outcome)
}
