//! Configuration module for Postpress
//!
//! Handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use postpress::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawling {} homepages", config.targets.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, GoogleConfig, OpenAiConfig, RunConfig, TargetEntry, UserAgentConfig};

// Re-export parser functions
pub use parser::load_config;
