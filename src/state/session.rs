use crate::state::frontier::{FetchRequest, Frontier};
use crate::state::ignored::IgnoredSet;
use crate::state::visited::VisitedSet;
use crate::url::visit_key;
use url::Url;

/// A page that answered 404, with the page that linked to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundRecord {
    pub url: String,
    pub from: String,
}

/// A request given up on under the `skip` error policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub url: String,
    pub from: String,
    pub reason: String,
}

/// All mutable state of one crawl run
///
/// The session is owned by the coordinator and lent to the fetcher and the
/// link extractor; nothing about a run lives outside of it.
#[derive(Debug, Default)]
pub struct CrawlSession {
    pub frontier: Frontier,
    pub visited: VisitedSet,
    pub ignored: IgnoredSet,
    pub not_found: Vec<NotFoundRecord>,
    pub skipped: Vec<SkippedRecord>,

    /// Number of requests taken off the frontier
    pub pages_requested: usize,

    /// Number of `<a href>` links inspected across all pages
    pub links_seen: usize,
}

impl CrawlSession {
    /// Creates a session whose frontier holds only the seed request
    pub fn new(start_url: &str) -> Self {
        let mut session = Self::default();
        session.frontier.push(FetchRequest::seed(start_url));
        session
    }

    /// Schedules `target` unless its path was already scheduled or fetched
    ///
    /// Marking and pushing happen together so a path enters the frontier at
    /// most once.
    pub fn schedule(&mut self, target: &Url, referrer: &str) -> bool {
        if !self.visited.mark_if_new(visit_key(target)) {
            return false;
        }

        self.frontier
            .push(FetchRequest::new(target.as_str(), referrer));
        true
    }

    /// Records a 404 for `request`
    pub fn record_not_found(&mut self, request: &FetchRequest) {
        self.not_found.push(NotFoundRecord {
            url: request.target.clone(),
            from: request.referrer.clone(),
        });
    }

    /// Records a request that failed and was skipped
    pub fn record_skipped(&mut self, request: &FetchRequest, reason: impl Into<String>) {
        self.skipped.push(SkippedRecord {
            url: request.target.clone(),
            from: request.referrer.clone(),
            reason: reason.into(),
        });
    }
}
