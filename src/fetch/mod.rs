//! HTTP fetching
//!
//! This module issues bounded-timeout GET requests and classifies
//! network-layer failures, behind a trait seam the tests can fake.

pub mod fetcher;

// Re-export commonly used items
pub use fetcher::{FetchResult, FetchUrl, HttpFetcher};

/// Canned fetcher for driving the pipeline deterministically in tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::{FetchResult, FetchUrl};
    use crate::core::types::FailureKind;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    pub(crate) struct FakeFetcher {
        responses: HashMap<String, (FetchResult, Duration)>,
        calls: Mutex<HashMap<String, usize>>,
    }

    impl FakeFetcher {
        pub(crate) fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: Mutex::new(HashMap::new()),
            }
        }

        /// How many times `url` has been fetched.
        pub(crate) fn call_count(&self, url: &str) -> usize {
            *self.calls.lock().unwrap().get(url).unwrap_or(&0)
        }

        /// Serve `body` with `status` for `url`.
        pub(crate) fn with_page(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses.insert(
                url.to_string(),
                (
                    FetchResult::Fetched {
                        status,
                        body: body.to_string(),
                    },
                    Duration::ZERO,
                ),
            );
            self
        }

        /// Serve an empty body with `status` for `url`.
        pub(crate) fn with_status(self, url: &str, status: u16) -> Self {
            self.with_page(url, status, "")
        }

        /// Fail requests for `url` with `kind`.
        pub(crate) fn with_failure(mut self, url: &str, kind: FailureKind) -> Self {
            self.responses
                .insert(url.to_string(), (FetchResult::Failed(kind), Duration::ZERO));
            self
        }

        /// Delay the canned response for `url`, to exercise completion-order
        /// independence under concurrency.
        pub(crate) fn with_delay(mut self, url: &str, delay: Duration) -> Self {
            if let Some(entry) = self.responses.get_mut(url) {
                entry.1 = delay;
            }
            self
        }
    }

    #[async_trait]
    impl FetchUrl for FakeFetcher {
        async fn fetch(&self, url: &str) -> FetchResult {
            *self
                .calls
                .lock()
                .unwrap()
                .entry(url.to_string())
                .or_insert(0) += 1;

            match self.responses.get(url) {
                Some((result, delay)) => {
                    if !delay.is_zero() {
                        tokio::time::sleep(*delay).await;
                    }
                    result.clone()
                }
                None => FetchResult::Failed(FailureKind::ConnectionError),
            }
        }
    }
}
