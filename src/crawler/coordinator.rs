//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop:
//! - Seeding the frontier with the start URL
//! - Draining the frontier one request at a time, in insertion order
//! - Dispatching fetch outcomes (not-found records, link extraction, errors)
//! - Throttling with a fixed pause between requests
//! - Building the final report

use crate::config::{Config, ErrorPolicy};
use crate::crawler::fetcher::{fetch_page, FetchOutcome, HttpTransport, Transport};
use crate::crawler::parser::extract_links;
use crate::output::{CrawlReport, CrawlStatistics};
use crate::state::{CrawlSession, FetchRequest};
use crate::CrawlError;
use chrono::Utc;
use std::time::{Duration, Instant};
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator<T: Transport = HttpTransport> {
    session: CrawlSession,
    transport: T,
    delay: Duration,
    policy: ErrorPolicy,
}

impl Coordinator<HttpTransport> {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Errors
    ///
    /// * `CrawlError::Config` - no start URL was configured
    /// * `CrawlError::Client` - the HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, CrawlError> {
        let transport = HttpTransport::new(
            &config.user_agent,
            Duration::from_secs(config.crawler.timeout_secs),
        )?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> Coordinator<T> {
    /// Creates a coordinator on top of any transport
    ///
    /// The start URL is checked before anything else, so a missing or
    /// invalid one fails here and no request is ever sent.
    pub fn with_transport(config: &Config, transport: T) -> Result<Self, CrawlError> {
        let start_url = config.start_url()?;

        Ok(Self {
            session: CrawlSession::new(start_url),
            transport,
            delay: Duration::from_millis(config.crawler.delay_ms),
            policy: config.crawler.on_error,
        })
    }

    /// Current crawl state
    pub fn session(&self) -> &CrawlSession {
        &self.session
    }

    /// The transport requests go through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs the crawl until the frontier is drained
    ///
    /// Under [`ErrorPolicy::Abort`] the first transport error, unexpected
    /// status or malformed link ends the run with that error and no report.
    pub async fn run(mut self) -> Result<CrawlReport, CrawlError> {
        let started_at = Utc::now();
        let start_time = Instant::now();

        while let Some(request) = self.session.frontier.next_request() {
            tracing::info!(
                "request [{} / {}]: <{}>",
                self.session.frontier.position() - 1,
                self.session.frontier.len(),
                request.target
            );
            self.session.pages_requested += 1;

            if let Err(e) = self.process_request(&request).await {
                match self.policy {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::Skip => {
                        tracing::warn!("skipping <{}>: {}", request.target, e);
                        self.session.record_skipped(&request, e.to_string());
                    }
                }
            }

            tokio::time::sleep(self.delay).await;
        }

        tracing::info!(
            "Crawl completed: {} pages requested, {} not found, {} skipped in {:?}",
            self.session.pages_requested,
            self.session.not_found.len(),
            self.session.skipped.len(),
            start_time.elapsed()
        );

        let statistics = CrawlStatistics::from_session(&self.session, started_at, Utc::now());
        Ok(CrawlReport::from_session(self.session, statistics))
    }

    /// Fetches one request and applies its outcome to the session
    async fn process_request(&mut self, request: &FetchRequest) -> Result<(), CrawlError> {
        match fetch_page(&self.transport, request).await? {
            FetchOutcome::NotFound => {
                tracing::info!(
                    "found 404 error from <{}>: <{}>",
                    request.referrer,
                    request.target
                );
                self.session.record_not_found(request);
            }
            FetchOutcome::Success { body } => {
                tracing::debug!("process response");

                let page_url =
                    Url::parse(&request.target).map_err(|source| CrawlError::PageUrl {
                        url: request.target.clone(),
                        source,
                    })?;

                let html = String::from_utf8_lossy(&body);
                let summary = extract_links(&mut self.session, &page_url, &html, self.policy)
                    .map_err(|source| CrawlError::Link {
                        page: request.target.clone(),
                        source,
                    })?;

                self.session.links_seen += summary.links_seen;
                tracing::debug!(
                    "{} links on <{}>, {} new",
                    summary.links_seen,
                    request.target,
                    summary.links_queued
                );
            }
        }

        Ok(())
    }
}

/// Runs a complete crawl with the given configuration
///
/// # Example
///
/// ```no_run
/// use linkrot::config::Config;
/// use linkrot::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut config = Config::default();
/// config.crawler.start_url = Some("https://example.com/".to_string());
/// let report = run_crawl(&config).await?;
/// print!("{}", report);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<CrawlReport, CrawlError> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
