//! Link extraction
//!
//! This module parses fetched HTML and produces the ordered sequence of
//! absolute HTTP(S) anchor targets to validate.

pub mod extractor;

// Re-export commonly used items
pub use extractor::{ExtractLinks, Extractor};
