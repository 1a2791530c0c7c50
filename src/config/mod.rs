//! Configuration module for Linkrot
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Command line flags are layered on top in `main`.
//!
//! # Example
//!
//! ```no_run
//! use linkrot::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkrot.toml")).unwrap();
//! println!("Crawler will wait {}ms between requests", config.crawler.delay_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, ErrorPolicy, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
