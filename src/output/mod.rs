//! Output module for crawl reports
//!
//! This module handles:
//! - The final not-found report printed after a full crawl
//! - Exporting the report as a markdown file
//! - Recording crawl statistics

mod markdown;
mod report;
pub mod stats;

pub use markdown::{format_markdown_report, write_markdown_report};
pub use report::CrawlReport;
pub use stats::CrawlStatistics;

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
