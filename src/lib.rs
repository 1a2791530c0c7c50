//! Linkrot: a same-host dead link finder
//!
//! This crate walks every reachable hyperlink of a single website, starting
//! from one seed page, and reports each page that answered 404 together with
//! the page that linked to it.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for a crawl run
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request to {url} (linked from {referrer}) failed: {source}")]
    Transport {
        url: String,
        referrer: String,
        source: crawler::TransportError,
    },

    #[error("http error: {status}: {url} (linked from {referrer})")]
    UnexpectedStatus {
        status: u16,
        url: String,
        referrer: String,
    },

    #[error("Bad link on {page}: {source}")]
    Link { page: String, source: LinkError },

    #[error("Invalid page URL {url}: {source}")]
    PageUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("start is required")]
    MissingStartUrl,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while resolving a single `href`
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("malformed link '{href}': {source}")]
    Malformed {
        href: String,
        source: ::url::ParseError,
    },
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, ErrorPolicy};
pub use crawler::{crawl, Coordinator};
pub use output::CrawlReport;
pub use state::{CrawlSession, FetchRequest, NotFoundRecord};
pub use crate::url::{resolve_link, Resolution};
