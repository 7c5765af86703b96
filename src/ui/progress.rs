use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

pub struct ProgressReporter {
    multi_progress: Arc<MultiProgress>,
    page_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            multi_progress: Arc::new(MultiProgress::new()),
            page_progress: None,
            enabled,
        }
    }

    pub fn start_page_scan(&mut self, total_pages: usize) {
        if !self.enabled {
            return;
        }

        let pb = self
            .multi_progress
            .add(ProgressBar::new(total_pages as u64));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages scanned ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Scanning pages");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.page_progress = Some(pb);
    }

    pub fn update_page_progress(&self, current: usize) {
        if let Some(ref pb) = self.page_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finish_page_scan(&self, reached: usize, total: usize) {
        if let Some(ref pb) = self.page_progress {
            let message = if reached == total {
                "✓ All pages scanned".to_string()
            } else {
                format!("✓ Scan complete ({reached}/{total} pages reachable)")
            };
            pb.finish_with_message(message);
        }
    }

    pub fn finish_and_clear(&self) {
        if self.enabled {
            // Clear the progress bars and add a blank line
            self.multi_progress.clear().unwrap_or(());
            println!();
        }
    }

    pub fn log_warning(&self, message: &str) {
        if self.enabled {
            self.multi_progress
                .println(format!("⚠ {message}"))
                .unwrap_or(());
        }
    }
}
