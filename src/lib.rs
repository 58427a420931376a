//! Postpress: a blog discovery and summarization pipeline
//!
//! This crate discovers new posts on a configured set of corporate blog
//! homepages, filters out already-processed and non-article pages, extracts
//! each post's body text, produces a structured summary via an OpenAI
//! completion, and publishes the results (per-post document plus a
//! consolidated CSV) to Google Drive. A durable append-only cache of handled
//! URLs guarantees that each URL is summarized at most once across runs.

pub mod cache;
pub mod config;
pub mod discovery;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod publish;
pub mod summarize;

use thiserror::Error;

/// Main error type for Postpress operations
#[derive(Debug, Error)]
pub enum PostpressError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cache error: {0}")]
    Cache(#[from] cache::CacheError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Summarization error: {0}")]
    Summarize(#[from] summarize::SummarizeError),

    #[error("Publish error: {0}")]
    Publish(#[from] publish::PublishError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Fetch-specific errors for homepage and post requests
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    /// True when the server answered with a non-success status; false when
    /// the request never completed (timeout, connection failure).
    pub fn is_definitive(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Result type alias for Postpress operations
pub type Result<T> = std::result::Result<T, PostpressError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use cache::UrlCache;
pub use config::Config;
pub use discovery::{discover, Classification};
pub use pipeline::{Orchestrator, PostState, RunSummary};
pub use summarize::SummaryRecord;
