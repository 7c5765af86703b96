/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Markdown output format - the table artifact written to disk
    pub const MARKDOWN: &str = "markdown";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = MARKDOWN;

    /// All valid output formats
    pub const ALL: [&str; 2] = [MARKDOWN, JSON];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
    /// HTTP 404 Not Found - resource not found
    pub const NOT_FOUND: u16 = 404;
    /// Lowest valid HTTP status code
    pub const MIN_STATUS: u16 = 100;
    /// Highest valid HTTP status code
    pub const MAX_STATUS: u16 = 599;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default request timeout in seconds (connect + read)
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
    /// Default retry delay in milliseconds
    pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
}

/// Report artifact constants
pub mod report {
    /// Title line of the markdown report
    pub const MARKDOWN_TITLE: &str = "# Link Checker Results";
    /// Table header row
    pub const TABLE_HEADER: &str = "| Source URL | Link | Status Code |";
    /// Table separator row
    pub const TABLE_SEPARATOR: &str = "|------------|------|------------|";
    /// Row text for a page that yielded no checkable links
    pub const EMPTY_PAGE_PLACEHOLDER: &str = "No links found or URL unreachable";
    /// Default output file name
    pub const DEFAULT_OUTPUT_FILE: &str = "links.md";
}

/// Link filtering constants
pub mod links {
    /// Anchors are kept only when their href starts with this prefix.
    /// Covers both `http://` and `https://`; everything else (relative
    /// paths, mailto:, fragments, javascript:) is dropped.
    pub const CHECKABLE_PREFIX: &str = "http";
}
