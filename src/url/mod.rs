//! URL handling module for Linkrot
//!
//! Resolves the links found on a page against the page URL and decides
//! whether they stay on the crawled host.

mod domain;
mod resolve;

pub use domain::{authority, visit_key};
pub use resolve::{resolve_link, Resolution};
