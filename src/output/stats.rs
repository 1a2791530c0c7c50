//! Statistics of a crawl run

use crate::state::CrawlSession;
use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the first request was sent
    pub started_at: DateTime<Utc>,

    /// When the frontier was drained
    pub finished_at: DateTime<Utc>,

    /// Requests taken off the frontier
    pub pages_requested: usize,

    /// Distinct paths scheduled or fetched
    pub paths_visited: usize,

    /// `<a href>` links inspected
    pub links_seen: usize,

    /// Pages that answered 404
    pub not_found: usize,

    /// Requests given up on under the skip policy
    pub skipped: usize,

    /// Distinct foreign schemes and hosts
    pub ignored_scopes: usize,
}

impl CrawlStatistics {
    /// Collects the counters of a finished session
    pub fn from_session(
        session: &CrawlSession,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            started_at,
            finished_at,
            pages_requested: session.pages_requested,
            paths_visited: session.visited.len(),
            links_seen: session.links_seen,
            not_found: session.not_found.len(),
            skipped: session.skipped.len(),
            ignored_scopes: session.ignored.len(),
        }
    }

    /// Wall-clock duration of the run, in whole seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}
