//! Output formatting and display logic for linkscan

use crate::config::Config;
use crate::core::types::Report;
use crate::ui::color::{Colors, colorize};

/// Metadata for displaying results
#[derive(Debug, Clone)]
pub struct DisplayMetadata {
    pub pages_scanned: usize,
    pub pages_unreachable: usize,
    pub links_checked: usize,
    pub links_broken: usize,
}

impl DisplayMetadata {
    pub fn from_report(report: &Report) -> Self {
        Self {
            pages_scanned: report.pages.len(),
            pages_unreachable: report
                .pages
                .iter()
                .filter(|p| p.page_outcome.failure().is_some())
                .count(),
            links_checked: report.total_links(),
            links_broken: report.broken_links().len(),
        }
    }
}

/// Display configuration information in a user-friendly format
pub fn display_config_info(config: &Config, concurrency: usize, seeds: &[String]) {
    println!(
        "{}: {}",
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Using concurrency", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(&concurrency.to_string(), Colors::BRIGHT_WHITE)
    );
    println!(
        "{}: {}",
        colorize(
            &format!(
                "{}{}{}",
                Colors::BOLD,
                "Using timeout (seconds)",
                Colors::RESET
            ),
            Colors::BRIGHT_CYAN
        ),
        colorize(
            &config.timeout.unwrap_or(10).to_string(),
            Colors::BRIGHT_WHITE
        )
    );
    println!(
        "{}: {}",
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Retry attempts", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(
            &config.retry_attempts.unwrap_or(0).to_string(),
            Colors::BRIGHT_WHITE
        )
    );

    // Show user agent if custom
    if let Some(ref user_agent) = config.user_agent {
        println!(
            "{}: {}",
            colorize(
                &format!("{}{}{}", Colors::BOLD, "User agent", Colors::RESET),
                Colors::BRIGHT_CYAN
            ),
            colorize(user_agent, Colors::BRIGHT_WHITE)
        );
    }

    println!(
        "\n{}",
        colorize(
            &format!(
                "{}Will validate links on {} page(s){}",
                Colors::BOLD,
                seeds.len(),
                Colors::RESET
            ),
            Colors::BRIGHT_CYAN
        )
    );
    for (i, seed) in seeds.iter().enumerate() {
        println!("{:4}. {}", i + 1, seed);
    }
    println!();
}

/// Display the run summary and any broken links found
pub fn display_summary(report: &Report, output_path: &str) {
    let meta = DisplayMetadata::from_report(report);

    println!(
        "Scanned {} page(s), checked {} link(s)",
        meta.pages_scanned, meta.links_checked
    );

    if meta.pages_unreachable > 0 {
        println!(
            "{}",
            colorize(
                &format!("{} page(s) unreachable", meta.pages_unreachable),
                Colors::YELLOW
            )
        );
    }

    if meta.links_broken == 0 {
        println!("{}", colorize("No broken links!", Colors::GREEN));
    } else {
        println!("\n> Broken links");
        for (i, link_result) in report.broken_links().iter().enumerate() {
            println!(
                "{:4}. {} - {} - {}",
                i + 1,
                link_result.outcome,
                link_result.link.href(),
                link_result.link.seed()
            );
        }
    }

    println!(
        "\nReport written to {}",
        colorize(output_path, Colors::BRIGHT_WHITE)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CheckOutcome, ExtractedLink, FailureKind, LinkResult, PageResult};

    fn report() -> Report {
        let seed = "https://a.example".to_string();
        Report {
            pages: vec![
                PageResult::reached(
                    seed.clone(),
                    200,
                    vec![
                        LinkResult {
                            link: ExtractedLink::new("https://ok.example", seed.as_str(), 0),
                            outcome: CheckOutcome::Status { code: 200 },
                        },
                        LinkResult {
                            link: ExtractedLink::new("https://gone.example", seed.as_str(), 1),
                            outcome: CheckOutcome::Status { code: 404 },
                        },
                    ],
                ),
                PageResult::unreachable("https://down.example".to_string(), FailureKind::Timeout),
            ],
        }
    }

    #[test]
    fn test_display_metadata_from_report() {
        let meta = DisplayMetadata::from_report(&report());

        assert_eq!(meta.pages_scanned, 2);
        assert_eq!(meta.pages_unreachable, 1);
        assert_eq!(meta.links_checked, 2);
        assert_eq!(meta.links_broken, 1);
    }

    #[test]
    fn test_display_metadata_empty_report() {
        let meta = DisplayMetadata::from_report(&Report::default());

        assert_eq!(meta.pages_scanned, 0);
        assert_eq!(meta.pages_unreachable, 0);
        assert_eq!(meta.links_checked, 0);
        assert_eq!(meta.links_broken, 0);
    }

    #[test]
    fn test_display_functions_dont_panic() {
        let rep = report();
        display_summary(&rep, "links.md");
        display_config_info(
            &Config::default(),
            4,
            &["https://a.example".to_string()],
        );
    }
}
