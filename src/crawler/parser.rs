//! Link extraction from fetched HTML pages
//!
//! The page is parsed with `scraper` and walked in document order (pre-order,
//! depth first) with an explicit stack, so deeply nested markup cannot
//! exhaust the call stack. Every `<a>` element contributes its first `href`.

use crate::config::ErrorPolicy;
use crate::state::{CrawlSession, IgnoredScope};
use crate::url::{resolve_link, visit_key, Resolution};
use crate::LinkError;
use scraper::Html;
use url::Url;

/// Counters for one extracted page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// `<a href>` elements found
    pub links_seen: usize,

    /// Links that became new frontier entries
    pub links_queued: usize,
}

/// Extracts links from a fetched page into the session frontier
///
/// The page's own path is marked visited first. Each link is then resolved
/// against `page_url`:
///
/// - foreign schemes and hosts are logged once per run and dropped
/// - same-host links whose path is new are queued with `page_url` as referrer
/// - already visited paths are dropped silently
///
/// # Errors
///
/// Under [`ErrorPolicy::Abort`] the first malformed `href` stops extraction
/// of the whole page. Under [`ErrorPolicy::Skip`] it is logged and the walk
/// continues with the next element.
///
/// # Example
///
/// ```
/// use linkrot::config::ErrorPolicy;
/// use linkrot::crawler::extract_links;
/// use linkrot::state::CrawlSession;
/// use url::Url;
///
/// let page = Url::parse("http://example.com/a/b").unwrap();
/// let mut session = CrawlSession::new(page.as_str());
/// let html = r#"<a href="../c">C</a>"#;
///
/// let summary = extract_links(&mut session, &page, html, ErrorPolicy::Abort).unwrap();
/// assert_eq!(summary.links_queued, 1);
/// assert_eq!(session.frontier.requests()[1].target, "http://example.com/c");
/// ```
pub fn extract_links(
    session: &mut CrawlSession,
    page_url: &Url,
    html: &str,
    policy: ErrorPolicy,
) -> Result<ExtractSummary, LinkError> {
    let document = Html::parse_document(html);
    let mut summary = ExtractSummary::default();

    session.visited.mark_if_new(visit_key(page_url));

    // Pre-order walk over first-child / next-sibling links. A node's sibling
    // is pushed before its first child so the whole subtree pops first.
    let mut stack = vec![document.tree.root()];
    while let Some(node) = stack.pop() {
        if let Some(sibling) = node.next_sibling() {
            stack.push(sibling);
        }
        if let Some(child) = node.first_child() {
            stack.push(child);
        }

        let Some(element) = node.value().as_element() else {
            continue;
        };
        if element.name() != "a" {
            continue;
        }

        let Some((_, href)) = element.attrs().find(|(name, _)| *name == "href") else {
            continue;
        };
        summary.links_seen += 1;

        match resolve_link(page_url, href) {
            Ok(resolution) => {
                if follow_link(session, page_url, resolution) {
                    summary.links_queued += 1;
                }
            }
            Err(e) => match policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    tracing::warn!("skipping bad link on <{}>: {}", page_url, e);
                }
            },
        }
    }

    Ok(summary)
}

/// Applies one resolved link to the session; returns true if it was queued
fn follow_link(session: &mut CrawlSession, page_url: &Url, resolution: Resolution) -> bool {
    match resolution {
        Resolution::ForeignScheme(scheme) => {
            if session
                .ignored
                .report_once(IgnoredScope::Scheme(scheme.clone()))
            {
                tracing::info!("ignoring link with unknown scheme <{}>", scheme);
            }
            false
        }
        Resolution::ForeignHost(host) => {
            if session.ignored.report_once(IgnoredScope::Host(host.clone())) {
                tracing::info!("ignoring link with external host <{}>", host);
            }
            false
        }
        Resolution::SameHostAbsolute(target) | Resolution::Relative(target) => {
            let queued = session.schedule(&target, page_url.as_str());
            if queued {
                tracing::debug!("queued <{}> from <{}>", target, page_url);
            }
            queued
        }
    }
}
