//! Configuration management for the Elemint tools
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config.toml, config.yaml)
//! - Default values
//!
//! Every path and URL the batch tools touch lives here, so tests can point
//! a run at temporary directories instead of the checked-in defaults.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Filesystem locations consumed and produced by the tools
    #[serde(default)]
    pub paths: PathsConfig,

    /// Metadata generation configuration
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Pinning service configuration
    #[serde(default)]
    pub pinata: PinataConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// JSON document holding the element records
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    /// Directory the per-element metadata files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory scanned for .png files to pin
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetadataConfig {
    /// Base URL the per-element image URLs are derived from
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Placeholder written into every record's external_url field
    #[serde(default = "default_external_url")]
    pub external_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PinataConfig {
    /// Pinning endpoint URL
    #[serde(default = "default_pinata_api_url")]
    pub api_url: String,

    /// Bearer credential (JWT). Usually supplied as PINATA_API_KEY via .env;
    /// absence is not pre-validated and surfaces as a per-file auth failure.
    pub jwt: Option<String>,

    /// CID version requested in pinataOptions
    #[serde(default = "default_cid_version")]
    pub cid_version: u8,

    /// Request timeout in seconds
    #[serde(default = "default_pinata_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,
}

// Default value functions
fn default_input_file() -> PathBuf { PathBuf::from("elements.json") }
fn default_output_dir() -> PathBuf { PathBuf::from("metadata") }
fn default_images_dir() -> PathBuf { PathBuf::from("images") }
fn default_image_base_url() -> String {
    "https://gray-acute-wildfowl-4.mypinata.cloud/ipfs/QmXBS6G6ZytV5mMxfpXGdr2CKfGzG38t1JZcypBkAfFpAs"
        .to_string()
}
fn default_external_url() -> String { "todo".to_string() }
fn default_pinata_api_url() -> String {
    "https://api.pinata.cloud/pinning/pinFileToIPFS".to_string()
}
fn default_cid_version() -> u8 { 0 }
fn default_pinata_timeout() -> u64 { 30 }
fn default_log_level() -> String { "info".to_string() }
fn default_json_logging() -> bool { false }

impl AppConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Load base config file
            .add_source(File::with_name("config/default").required(false))
            // Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // Load local overrides
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables with APP__ prefix
            // e.g., APP__PATHS__OUTPUT_DIR=/tmp/metadata
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app: AppConfig = config.try_deserialize()?;

        // The pinning credential conventionally lives in PINATA_API_KEY
        if app.pinata.jwt.is_none() {
            app.pinata.jwt = std::env::var("PINATA_API_KEY").ok();
        }

        Ok(app)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            metadata: MetadataConfig::default(),
            pinata: PinataConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_dir: default_output_dir(),
            images_dir: default_images_dir(),
        }
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            image_base_url: default_image_base_url(),
            external_url: default_external_url(),
        }
    }
}

impl Default for PinataConfig {
    fn default() -> Self {
        Self {
            api_url: default_pinata_api_url(),
            jwt: None,
            cid_version: default_cid_version(),
            timeout_secs: default_pinata_timeout(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: default_json_logging(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.paths.input_file, PathBuf::from("elements.json"));
        assert_eq!(config.paths.output_dir, PathBuf::from("metadata"));
        assert_eq!(config.metadata.external_url, "todo");
        assert_eq!(config.pinata.cid_version, 0);
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: AppConfig = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(config.paths.images_dir, PathBuf::from("images"));
        assert!(config.pinata.jwt.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig =
            serde_json::from_str(r#"{"paths": {"output_dir": "/tmp/out"}}"#).unwrap();
        assert_eq!(config.paths.output_dir, PathBuf::from("/tmp/out"));
        // untouched fields keep their defaults
        assert_eq!(config.paths.input_file, PathBuf::from("elements.json"));
    }
}
