use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a network-layer failure, distinct from any HTTP status.
///
/// Replaces the sentinel "status code 0" convention some link checkers use:
/// a failure is a separate variant of [`CheckOutcome`], so downstream
/// consumers can never mistake a real status for a network error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request exceeded the configured timeout (connect + read)
    Timeout,
    /// Connection refused, reset, or otherwise failed
    ConnectionError,
    /// Hostname could not be resolved
    DnsError,
    /// TLS handshake or certificate validation failed
    TlsError,
    /// Any other request failure
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::ConnectionError => write!(f, "connection error"),
            FailureKind::DnsError => write!(f, "dns error"),
            FailureKind::TlsError => write!(f, "tls error"),
            FailureKind::Other => write!(f, "unreachable"),
        }
    }
}

/// The resolved reachability of a URL: an HTTP status surfaced uninterpreted,
/// or a typed network failure. 3xx/4xx/5xx are not errors at this level;
/// whether a 404 counts as "broken" is a presentation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The server answered with an HTTP status code (100-599)
    Status { code: u16 },
    /// The request failed before a status could be obtained
    Failed { failure: FailureKind },
}

impl CheckOutcome {
    /// The HTTP status code, if the request got one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CheckOutcome::Status { code } => Some(*code),
            CheckOutcome::Failed { .. } => None,
        }
    }

    /// The failure kind, if the request failed at the network layer.
    pub fn failure(&self) -> Option<FailureKind> {
        match self {
            CheckOutcome::Status { .. } => None,
            CheckOutcome::Failed { failure } => Some(*failure),
        }
    }

    /// Presentation-level convenience: true for any status below 400.
    /// The pipeline itself never interprets status codes.
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckOutcome::Status { code } if *code < 400)
    }

    /// Inverse of [`CheckOutcome::is_ok`].
    pub fn is_not_ok(&self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Status { code } => write!(f, "{code}"),
            CheckOutcome::Failed { failure } => write!(f, "{failure}"),
        }
    }
}

/// An absolute HTTP(S) anchor reference discovered on a seed page.
///
/// `position` is the 0-indexed document order among kept anchors and doubles
/// as the result slot index during concurrent checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedLink {
    /// The anchor's href value, verbatim
    pub href: String,
    /// The seed page the anchor was found on
    pub seed: String,
    /// Document-order index among kept anchors (0-indexed)
    pub position: usize,
}

impl ExtractedLink {
    pub fn new<S: Into<String>, T: Into<String>>(href: S, seed: T, position: usize) -> Self {
        Self {
            href: href.into(),
            seed: seed.into(),
            position,
        }
    }

    /// Get the href as a string slice.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Get the seed page URL as a string slice.
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

/// One checked link: the anchor and its resolved reachability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResult {
    pub link: ExtractedLink,
    pub outcome: CheckOutcome,
}

/// The complete result for one seed page.
///
/// A seed whose own fetch failed is still represented: `links` is empty and
/// `page_outcome` carries the failure. Seeds are never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// The seed page URL
    pub seed: String,
    /// Outcome of fetching the seed page itself
    pub page_outcome: CheckOutcome,
    /// Results for every kept anchor, in document order
    pub links: Vec<LinkResult>,
}

impl PageResult {
    /// Create a PageResult for a seed page that was fetched successfully.
    pub fn reached(seed: String, status: u16, links: Vec<LinkResult>) -> Self {
        Self {
            seed,
            page_outcome: CheckOutcome::Status { code: status },
            links,
        }
    }

    /// Create a terminal PageResult for a seed page that could not be fetched.
    pub fn unreachable(seed: String, failure: FailureKind) -> Self {
        Self {
            seed,
            page_outcome: CheckOutcome::Failed { failure },
            links: Vec::new(),
        }
    }
}

/// The order-preserving result of one validation run: one [`PageResult`] per
/// seed, in input order. Pure value, fully serializable; built once by the
/// aggregator and handed immutably to the renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub pages: Vec<PageResult>,
}

impl Report {
    /// Total number of links checked across all pages.
    pub fn total_links(&self) -> usize {
        self.pages.iter().map(|p| p.links.len()).sum()
    }

    /// All link results that are not ok (non-2xx/3xx status or failure),
    /// in report order.
    pub fn broken_links(&self) -> Vec<&LinkResult> {
        self.pages
            .iter()
            .flat_map(|p| p.links.iter())
            .filter(|lr| lr.outcome.is_not_ok())
            .collect()
    }
}
