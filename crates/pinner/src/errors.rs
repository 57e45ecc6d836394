//! Pinner error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinnerError {
    #[error("Pinning API error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
