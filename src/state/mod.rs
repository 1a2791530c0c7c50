//! State module for tracking crawl progress
//!
//! This module holds everything a crawl run mutates.
//!
//! # Components
//!
//! - `Frontier`: pending `FetchRequest`s, drained in insertion order
//! - `VisitedSet`: paths already scheduled or fetched
//! - `IgnoredSet`: foreign schemes and hosts already logged
//! - `CrawlSession`: owns the above plus the not-found records

mod frontier;
mod ignored;
mod session;
mod visited;

// Re-export main types
pub use frontier::{FetchRequest, Frontier, SEED_REFERRER};
pub use ignored::{IgnoredScope, IgnoredSet};
pub use session::{CrawlSession, NotFoundRecord, SkippedRecord};
pub use visited::VisitedSet;
