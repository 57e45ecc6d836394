//! Pinata pinning client
//!
//! One authenticated multipart upload per file against the
//! `pinFileToIPFS` endpoint. No retries; a failed upload is the caller's
//! problem to log and skip.

use crate::errors::PinnerError;
use elemint_common::config::PinataConfig;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Success body returned by the pinning endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinResponse {
    pub ipfs_hash: String,
    pub pin_size: u64,
    pub timestamp: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PinataMetadata {
    name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PinataOptions {
    cid_version: u8,
}

pub struct PinataClient {
    client: reqwest::Client,
    api_url: String,
    jwt: String,
    cid_version: u8,
}

impl PinataClient {
    /// Build a client from configuration. A missing credential is not
    /// rejected here: the empty bearer token surfaces as a per-file
    /// authentication failure at upload time.
    pub fn new(config: &PinataConfig) -> Result<Self, PinnerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            jwt: config.jwt.clone().unwrap_or_default(),
            cid_version: config.cid_version,
        })
    }

    /// Pin one file, carrying its basename as the pin's metadata name.
    pub async fn pin_file(&self, path: &Path) -> Result<PinResponse, PinnerError> {
        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let bytes = tokio::fs::read(path).await?;

        debug!(file = %basename, size = bytes.len(), "Uploading file to pinning service");

        let metadata = serde_json::to_string(&PinataMetadata {
            name: basename.clone(),
        })?;
        let options = serde_json::to_string(&PinataOptions {
            cid_version: self.cid_version,
        })?;

        let form = Form::new()
            .part(
                "file",
                Part::bytes(bytes)
                    .file_name(basename)
                    .mime_str("image/png")?,
            )
            .text("pinataMetadata", metadata)
            .text("pinataOptions", options);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.jwt)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PinnerError::Upstream { status, body });
        }

        Ok(response.json().await?)
    }
}
