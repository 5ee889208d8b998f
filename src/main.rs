use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shoe_alert::app;
use shoe_alert::config::Config;
use shoe_alert::notify::Outcome;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shoe_alert=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Shoe alert failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    info!("Starting Shoe Alert");

    let config = Config::load()?;

    match app::run(&config).await? {
        Outcome::Quiet => info!("Run complete, no alert needed"),
        Outcome::Sent { queries, shoes } => {
            info!("Run complete, alerted on {} shoes from {} queries", shoes, queries)
        }
    }

    Ok(())
}
