//! Metadata pipeline error types

use thiserror::Error;

/// Fatal, pipeline-level failures. Per-item write failures are logged and
/// skipped by the emitter rather than surfaced here.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to load element file {path}: {message}")]
    Load { path: String, message: String },

    #[error("Element file contains no elements")]
    EmptyElements,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
