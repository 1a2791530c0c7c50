use crate::output::stats::CrawlStatistics;
use crate::state::{CrawlSession, NotFoundRecord, SkippedRecord};
use std::fmt;

const BANNER: &str = " ============================================================= ";

/// Result of a fully drained crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// 404 pages in the order they were found
    pub not_found: Vec<NotFoundRecord>,

    /// Requests given up on under the skip policy
    pub skipped: Vec<SkippedRecord>,

    /// Foreign schemes and hosts, as `scheme:<s>` / `host:<h>`, sorted
    pub ignored: Vec<String>,

    pub statistics: CrawlStatistics,
}

impl CrawlReport {
    /// Consumes a finished session into its report
    pub fn from_session(session: CrawlSession, statistics: CrawlStatistics) -> Self {
        let ignored = session.ignored.sorted();
        Self {
            not_found: session.not_found,
            skipped: session.skipped,
            ignored,
            statistics,
        }
    }

    /// True when no 404 was found and nothing was skipped
    pub fn is_clean(&self) -> bool {
        self.not_found.is_empty() && self.skipped.is_empty()
    }
}

/// Renders the not-found overview between banner lines
///
/// Skipped requests, if any, follow in their own section.
impl fmt::Display for CrawlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "    OVERVIEW OF NOT FOUND ERRORS")?;
        writeln!(f, "{}", BANNER)?;
        for record in &self.not_found {
            writeln!(f, "from <{}>: {}", record.from, record.url)?;
        }
        writeln!(f, "{}", BANNER)?;

        if !self.skipped.is_empty() {
            writeln!(f, "    SKIPPED REQUESTS")?;
            writeln!(f, "{}", BANNER)?;
            for record in &self.skipped {
                writeln!(
                    f,
                    "from <{}>: {} ({})",
                    record.from, record.url, record.reason
                )?;
            }
            writeln!(f, "{}", BANNER)?;
        }

        Ok(())
    }
}
