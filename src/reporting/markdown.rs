use chrono::Utc;
use std::io;

use crate::core::constants::report;
use crate::core::types::{CheckOutcome, Report};

/// Renders a finished [`Report`] into the artifact written to disk.
pub trait RenderReport {
    fn render(&self, report: &Report) -> io::Result<String>;
}

/// The default artifact: a markdown table with one row per checked link.
///
/// Failure outcomes render as their human-readable placeholder (`timeout`,
/// `connection error`, ...), never as a numeric code. A page that yielded no
/// checkable links - including an unreachable page - still gets one row, so
/// no seed is ever invisible in the artifact.
#[derive(Default)]
pub struct MarkdownRenderer;

impl RenderReport for MarkdownRenderer {
    fn render(&self, rep: &Report) -> io::Result<String> {
        let mut out = String::new();

        out.push_str(report::MARKDOWN_TITLE);
        out.push_str("\n\n");
        out.push_str(&format!(
            "Generated: {}\n\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(report::TABLE_HEADER);
        out.push('\n');
        out.push_str(report::TABLE_SEPARATOR);
        out.push('\n');

        for page in &rep.pages {
            if page.links.is_empty() {
                out.push_str(&format!(
                    "| {} | {} | - |\n",
                    page.seed,
                    report::EMPTY_PAGE_PLACEHOLDER
                ));
                continue;
            }

            for link_result in &page.links {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    page.seed,
                    link_result.link.href(),
                    render_outcome(&link_result.outcome)
                ));
            }
        }

        Ok(out)
    }
}

/// Structured output for automation: the serde serialization of the report.
#[derive(Default)]
pub struct JsonRenderer;

impl RenderReport for JsonRenderer {
    fn render(&self, rep: &Report) -> io::Result<String> {
        serde_json::to_string_pretty(rep).map_err(io::Error::from)
    }
}

fn render_outcome(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Status { code } => code.to_string(),
        CheckOutcome::Failed { failure } => failure.to_string(),
    }
}
