//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and response classification
//! - HTML parsing and link extraction
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
#[cfg(test)]
pub(crate) mod mock;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{
    build_http_client, fetch_page, FetchOutcome, HttpTransport, RawResponse, Transport,
    TransportError,
};
pub use parser::{extract_links, ExtractSummary};

use crate::config::Config;
use crate::output::{write_markdown_report, CrawlReport};
use crate::CrawlError;
use std::path::Path;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Drain the frontier starting from the configured start URL
/// 3. Write the markdown report, if a report path is configured
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The frontier was fully drained
/// * `Err(CrawlError)` - Crawl failed
pub async fn crawl(config: Config) -> Result<CrawlReport, CrawlError> {
    let report = run_crawl(&config).await?;

    if let Some(path) = &config.output.report_path {
        write_markdown_report(&report, Path::new(path))?;
        tracing::info!("Markdown report written to {}", path);
    }

    Ok(report)
}
