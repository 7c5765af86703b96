use futures::{StreamExt, stream};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::Config;
use crate::core::types::{CheckOutcome, ExtractedLink, LinkResult, PageResult};
use crate::extract::{ExtractLinks, Extractor};
use crate::fetch::{FetchResult, FetchUrl};

/// Per-seed pipeline: fetch the page, extract candidate links, resolve each
/// link's reachability.
///
/// State machine per seed: fetching the page either fails (terminal, empty
/// links, failure recorded) or feeds extraction and the per-link checks.
/// Link-level failures are recorded in their own slot and never abort
/// sibling checks.
pub struct LinkChecker<'a, F> {
    fetcher: &'a F,
    extractor: Extractor,
    max_in_flight: usize,
    retry_attempts: u8,
    retry_delay: Duration,
}

impl<'a, F: FetchUrl> LinkChecker<'a, F> {
    pub fn with_config(fetcher: &'a F, config: &Config) -> Self {
        Self {
            fetcher,
            extractor: Extractor,
            max_in_flight: config.max_concurrency(),
            retry_attempts: config.retry_attempts.unwrap_or(0),
            retry_delay: config.retry_delay_duration(),
        }
    }

    /// Check one seed page and produce its complete result.
    pub async fn check_page(&self, seed: &str) -> PageResult {
        match self.fetcher.fetch(seed).await {
            FetchResult::Failed(failure) => PageResult::unreachable(seed.to_string(), failure),
            FetchResult::Fetched { status, body } => {
                let candidates = self.extractor.extract(&body, seed);
                let links = self.check_links(candidates).await;
                PageResult::reached(seed.to_string(), status, links)
            }
        }
    }

    /// Resolve every candidate concurrently, bounded, collecting results into
    /// pre-sized slots indexed by document position. Completion order never
    /// affects output order.
    async fn check_links(&self, candidates: Vec<ExtractedLink>) -> Vec<LinkResult> {
        let mut slots: Vec<Option<LinkResult>> = candidates.iter().map(|_| None).collect();

        let mut outcomes = stream::iter(candidates)
            .map(|link| async move {
                let outcome = self.check_link(&link.href).await;
                (link.position, LinkResult { link, outcome })
            })
            .buffer_unordered(self.max_in_flight);

        while let Some((position, result)) = outcomes.next().await {
            slots[position] = Some(result);
        }
        drop(outcomes);

        slots.into_iter().flatten().collect()
    }

    /// One link check. Single attempt by default; configured retries apply to
    /// failure outcomes only, never to HTTP statuses. The response body of
    /// these secondary fetches is discarded.
    async fn check_link(&self, url: &str) -> CheckOutcome {
        let mut attempts = 0;
        loop {
            let outcome = self.fetcher.fetch(url).await.outcome();
            match outcome {
                CheckOutcome::Failed { .. } if attempts < self.retry_attempts => {
                    attempts += 1;
                    sleep(self.retry_delay).await;
                }
                outcome => return outcome,
            }
        }
    }
}
