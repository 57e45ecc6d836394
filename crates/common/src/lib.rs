//! Elemint Common Library
//!
//! Shared code for the Elemint batch tools:
//! - Configuration management (paths, metadata templating, pinning service)

pub mod config;

// Re-export commonly used types
pub use config::AppConfig;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
