use std::fs;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shoe_alert::app;
use shoe_alert::config::Config;
use shoe_alert::notify::{Renderer, TeraRenderer};
use shoe_alert::search::HttpSearchClient;

/// Runs the saved queries and writes the email body to disk instead of sending it.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("shoe_alert=info,preview_email=info")
        }))
        .init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "email_preview.html".to_string());

    let config = Config::load()?;
    let source = HttpSearchClient::new()?;
    let payload = app::collect(&config, &source).await?;

    if payload.is_empty() {
        info!("Nothing at or below {:.2}; no preview written", config.threshold_price);
        return Ok(());
    }

    let body = TeraRenderer::from_file(&config.template_path).render(&payload)?;
    fs::write(&output, &body).with_context(|| format!("Failed to write {}", output))?;

    info!(
        "Wrote preview for {} queries ({} shoes) to {}",
        payload.len(),
        payload.qualifying_count(),
        output
    );
    Ok(())
}
