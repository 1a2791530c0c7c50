//! HTTP fetcher implementation
//!
//! This module handles every HTTP request of the crawler:
//! - The `Transport` trait, the seam between the crawl engine and the network
//! - `HttpTransport`, the reqwest-backed production transport
//! - Classification of a response into success, not-found or failure

use crate::config::UserAgentConfig;
use crate::state::FetchRequest;
use crate::CrawlError;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Failure below the HTTP status level (DNS, connect, TLS, timeout, body read)
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Status and fully read body of one GET
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// One blocking-style GET against the network
///
/// Implementations must read the body to completion before returning, so
/// that the connection is released on every path.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// Result of a fetch that did not fail
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// HTTP 200, with the page body
    Success { body: Vec<u8> },

    /// HTTP 404
    NotFound,
}

/// Production transport backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the transport with the configured user agent and timeout
    pub fn new(config: &UserAgentConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config, timeout)?,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed with reqwest's default policy; the status of the
/// final response is what gets classified.
///
/// # Example
///
/// ```no_run
/// use linkrot::config::UserAgentConfig;
/// use linkrot::crawler::build_http_client;
/// use std::time::Duration;
///
/// let config = UserAgentConfig {
///     crawler_name: "linkrot".to_string(),
///     crawler_version: "1.0".to_string(),
/// };
///
/// let client = build_http_client(&config, Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one frontier entry and classifies the response
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 | `Ok(Success)` |
/// | HTTP 404 | `Ok(NotFound)` |
/// | any other status | `Err(UnexpectedStatus)` |
/// | transport failure | `Err(Transport)` |
pub async fn fetch_page<T: Transport>(
    transport: &T,
    request: &FetchRequest,
) -> Result<FetchOutcome, CrawlError> {
    let response = transport
        .get(&request.target)
        .await
        .map_err(|source| CrawlError::Transport {
            url: request.target.clone(),
            referrer: request.referrer.clone(),
            source,
        })?;

    match response.status {
        200 => Ok(FetchOutcome::Success {
            body: response.body,
        }),
        404 => Ok(FetchOutcome::NotFound),
        status => Err(CrawlError::UnexpectedStatus {
            status,
            url: request.target.clone(),
            referrer: request.referrer.clone(),
        }),
    }
}
