//! In-memory transport for unit tests

use crate::crawler::fetcher::{RawResponse, Transport, TransportError};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 with an HTML body
    Page(String),
    /// Any status with an empty body
    Status(u16),
    /// Transport-level failure
    Fail(String),
}

impl MockResponse {
    pub fn page(html: &str) -> Self {
        Self::Page(html.to_string())
    }
}

/// Serves canned responses by exact URL; unknown URLs answer 404
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<String, MockResponse>,
    requested: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, response: MockResponse) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    /// URLs requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.requested.lock().unwrap().push(url.to_string());

        match self.routes.get(url) {
            Some(MockResponse::Page(html)) => Ok(RawResponse {
                status: 200,
                body: html.as_bytes().to_vec(),
            }),
            Some(MockResponse::Status(status)) => Ok(RawResponse {
                status: *status,
                body: Vec::new(),
            }),
            Some(MockResponse::Fail(message)) => Err(TransportError::Other(message.clone())),
            None => Ok(RawResponse {
                status: 404,
                body: Vec::new(),
            }),
        }
    }
}

/// Lets a test keep the transport and inspect it after the coordinator is gone
impl Transport for &MockTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        (**self).get(url).await
    }
}
