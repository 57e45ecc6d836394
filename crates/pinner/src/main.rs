//! Elemint pinning uploader
//!
//! Pins every PNG asset in the images directory to the configured IPFS
//! pinning service, one authenticated multipart upload at a time. Failed
//! uploads (including auth failures from a missing credential) are logged
//! and skipped; only an unreadable images directory is fatal.

mod client;
mod errors;
mod processor;

use crate::client::PinataClient;
use crate::processor::UploadProcessor;
use elemint_common::{config::AppConfig, VERSION};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables (PINATA_API_KEY lives in .env)
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));
    if config.observability.json_logging {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }

    info!("Starting Elemint pinning uploader v{}", VERSION);

    let client = PinataClient::new(&config.pinata)?;
    let processor = UploadProcessor::new(client);

    let (pinned, failed) = processor
        .pin_directory(&config.paths.images_dir)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Unable to scan images directory");
            e
        })?;

    info!(pinned = pinned, failed = failed, "Pinning run complete");

    Ok(())
}
