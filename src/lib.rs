//! linkscan - validate outbound links on web pages
//!
//! For each seed page, linkscan fetches the page, extracts every absolute
//! HTTP(S) anchor reference, and resolves each link's reachability (HTTP
//! status, or a typed network failure) into an order-preserving report.

pub mod config;
pub mod core;
pub mod extract;
pub mod fetch;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export the primary API surface
pub use crate::core::error::{LinkScanError, Result};
pub use crate::core::types::{
    CheckOutcome, ExtractedLink, FailureKind, LinkResult, PageResult, Report,
};
pub use crate::fetch::{FetchUrl, HttpFetcher};
pub use crate::validation::Aggregator;
