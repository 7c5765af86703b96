use futures::{StreamExt, stream};

use crate::config::Config;
use crate::core::types::{PageResult, Report};
use crate::fetch::FetchUrl;
use crate::ui::ProgressReporter;
use crate::validation::LinkChecker;

/// Drives the per-seed checker over the full seed list and assembles the
/// order-preserving [`Report`].
///
/// Seeds are processed concurrently, bounded by the configured maximum, with
/// results collected into pre-sized slots indexed by seed position. Any
/// subset of seeds may fail without aborting the run; the report always has
/// exactly one entry per seed, in input order.
pub struct Aggregator<F> {
    fetcher: F,
}

impl<F: FetchUrl> Aggregator<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn run_with_config(
        &self,
        seeds: &[String],
        config: &Config,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Report {
        let checker = LinkChecker::with_config(&self.fetcher, config);

        if let Some(ref mut prog) = progress {
            prog.start_page_scan(seeds.len());
        }

        let mut slots: Vec<Option<PageResult>> = seeds.iter().map(|_| None).collect();
        let mut completed = 0;

        let mut pages = stream::iter(seeds.iter().enumerate())
            .map(|(index, seed)| {
                let checker = &checker;
                async move { (index, checker.check_page(seed).await) }
            })
            .buffer_unordered(config.max_concurrency());

        while let Some((index, page)) = pages.next().await {
            completed += 1;
            if let Some(ref prog) = progress {
                prog.update_page_progress(completed);
                if let Some(failure) = page.page_outcome.failure() {
                    prog.log_warning(&format!("{} unreachable ({failure})", page.seed));
                }
            }
            slots[index] = Some(page);
        }
        drop(pages);

        let report = Report {
            pages: slots.into_iter().flatten().collect(),
        };

        if let Some(ref prog) = progress {
            let reached = report
                .pages
                .iter()
                .filter(|p| p.page_outcome.is_ok())
                .count();
            prog.finish_page_scan(reached, report.pages.len());
        }

        report
    }
}
