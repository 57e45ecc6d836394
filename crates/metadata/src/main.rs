//! Elemint metadata generator
//!
//! Converts the element records in the input JSON document into one
//! NFT-style metadata file per element:
//! 1. Loads the ordered records from `elements.json`
//! 2. Maps each record to its metadata descriptor
//! 3. Writes `<number>.json` files sequentially into the output directory
//!
//! A load failure is fatal and exits non-zero; individual write failures
//! are logged and skipped.

mod emitter;
mod errors;
mod loader;
mod transform;

use crate::emitter::Emitter;
use crate::loader::load_elements;
use crate::transform::{to_metadata, MetadataRecord};
use elemint_common::{config::AppConfig, VERSION};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
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

    info!("Starting Elemint metadata generator v{}", VERSION);

    let elements = load_elements(&config.paths.input_file).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load element records");
        e
    })?;

    info!(count = elements.len(), "Element records loaded");

    let mut records: Vec<(u32, MetadataRecord)> = Vec::with_capacity(elements.len());
    for element in &elements {
        tracing::debug!(
            number = element.number,
            symbol = %element.symbol,
            "Transforming element"
        );
        records.push((element.number, to_metadata(element, &config.metadata)));
    }

    let emitter = Emitter::new(&config.paths.output_dir);
    let written = emitter.emit_all(&records).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to prepare output directory");
        e
    })?;

    info!(
        written = written,
        total = records.len(),
        output_dir = %config.paths.output_dir.display(),
        "Metadata generation complete"
    );

    Ok(())
}
