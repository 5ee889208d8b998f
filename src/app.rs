use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::models::NotificationPayload;
use crate::notify::{notify, Mailer, Outcome, Renderer, SmtpMailer, TeraRenderer};
use crate::report::assemble;
use crate::search::{HttpSearchClient, QuerySource};

/// One full check: query every saved search, then email anything cheap enough.
pub async fn run(config: &Config) -> Result<Outcome> {
    let source = HttpSearchClient::new()?;
    let renderer = TeraRenderer::from_file(&config.template_path);
    let mailer = SmtpMailer::from_config(config);

    run_with(config, &source, &renderer, &mailer).await
}

pub async fn run_with<S, R, M>(
    config: &Config,
    source: &S,
    renderer: &R,
    mailer: &M,
) -> Result<Outcome>
where
    S: QuerySource + ?Sized,
    R: Renderer + ?Sized,
    M: Mailer + ?Sized,
{
    let payload = collect(config, source).await?;

    notify(&payload, renderer, mailer, &config.subject)
        .await
        .context("Failed to send shoe alert")
}

/// Runs the saved queries without notifying anyone.
pub async fn collect<S>(config: &Config, source: &S) -> Result<NotificationPayload>
where
    S: QuerySource + ?Sized,
{
    info!("Checking {} saved queries", config.query_urls.len());

    let payload = assemble(source, &config.query_urls, config.threshold_price)
        .await
        .context("Failed to query shoe prices")?;

    info!(
        "{} of {} queries have shoes at or below {:.2}",
        payload.len(),
        config.query_urls.len(),
        config.threshold_price
    );
    Ok(payload)
}
