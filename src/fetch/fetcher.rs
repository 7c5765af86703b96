use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::{CheckOutcome, FailureKind};

/// Outcome of a single bounded-timeout GET.
///
/// The status is surfaced uninterpreted; 3xx/4xx/5xx are not errors at this
/// layer. The body is retained so page fetches can feed the extractor; link
/// checks discard it.
#[derive(Debug, Clone)]
pub enum FetchResult {
    /// The server answered with a status code
    Fetched { status: u16, body: String },
    /// The request failed before a status could be obtained
    Failed(FailureKind),
}

impl FetchResult {
    /// Fold this result into the outcome recorded in the report.
    pub fn outcome(&self) -> CheckOutcome {
        match self {
            FetchResult::Fetched { status, .. } => CheckOutcome::Status { code: *status },
            FetchResult::Failed(failure) => CheckOutcome::Failed { failure: *failure },
        }
    }
}

/// Seam for issuing HTTP requests, so the pipeline can be driven by a canned
/// fetcher in tests.
#[async_trait]
pub trait FetchUrl: Send + Sync {
    /// Issue a single GET for `url` with the configured hard timeout
    /// (connect + read). Never retries; retry policy belongs to the checker.
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// Production fetcher backed by a pooled reqwest client.
///
/// Holds the global request semaphore: every fetch acquires one permit, so
/// the configured concurrency bounds total in-flight requests across seed
/// fetches and link checks together.
pub struct HttpFetcher {
    client: reqwest::Client,
    permits: Arc<Semaphore>,
}

impl HttpFetcher {
    pub fn from_config(config: &Config) -> Result<Self> {
        let redirect_policy = Policy::limited(10);
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let mut client_builder = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(redirect_policy)
            .user_agent(user_agent);

        if config.skip_ssl_verification.unwrap_or(false) {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build()?;

        Ok(Self {
            client,
            permits: Arc::new(Semaphore::new(config.max_concurrency())),
        })
    }
}

#[async_trait]
impl FetchUrl for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        let _permit = self
            .permits
            .acquire()
            .await
            .expect("request semaphore is never closed");

        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(body) => FetchResult::Fetched { status, body },
                    // The hard timeout covers the body read as well
                    Err(err) => FetchResult::Failed(classify_error(&err)),
                }
            }
            Err(err) => FetchResult::Failed(classify_error(&err)),
        }
    }
}

/// Map a reqwest error onto the failure taxonomy.
///
/// reqwest exposes timeouts directly; DNS and TLS failures are only visible
/// in the source chain, so those are sniffed from the chained messages the
/// same way the chain is surfaced to users.
pub(crate) fn classify_error(err: &reqwest::Error) -> FailureKind {
    if err.is_timeout() {
        return FailureKind::Timeout;
    }

    let chain = source_chain_text(err);
    if chain.contains("dns") || chain.contains("failed to lookup") {
        return FailureKind::DnsError;
    }
    if chain.contains("certificate") || chain.contains("tls") || chain.contains("ssl") {
        return FailureKind::TlsError;
    }
    if err.is_connect() {
        return FailureKind::ConnectionError;
    }
    FailureKind::Other
}

/// Lower-cased concatenation of the error message and its source chain.
fn source_chain_text(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push(' ');
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text.to_lowercase()
}
