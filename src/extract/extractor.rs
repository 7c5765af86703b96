use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::constants::links;
use crate::core::types::ExtractedLink;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Seam for turning a fetched page body into the ordered link candidates.
pub trait ExtractLinks {
    fn extract(&self, body: &str, seed: &str) -> Vec<ExtractedLink>;
}

/// HTML anchor extractor.
///
/// Parsing is permissive (html5ever recovery); malformed markup never aborts
/// extraction. Only href values starting with `http` are kept, in document
/// order. Relative URLs are NOT resolved against the seed, so relative
/// hyperlinks are dropped like every other non-http reference; this mirrors
/// the filtering policy the report consumers expect and is documented
/// behavior, not an oversight.
#[derive(Debug, Default)]
pub struct Extractor;

impl ExtractLinks for Extractor {
    fn extract(&self, body: &str, seed: &str) -> Vec<ExtractedLink> {
        let document = Html::parse_document(body);

        document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|element| element.value().attr("href"))
            .filter(|href| href.starts_with(links::CHECKABLE_PREFIX))
            .enumerate()
            .map(|(position, href)| ExtractedLink::new(href, seed, position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    const SEED: &str = "https://a.example/page";

    fn extract(body: &str) -> Vec<ExtractedLink> {
        Extractor.extract(body, SEED)
    }

    #[test]
    fn test_extract__keeps_absolute_http_links_in_document_order() {
        let body = r#"
            <html><body>
            <a href="https://x.example">x</a>
            <p>arbitrary</p>
            <a href="http://y.example/path?q=1">y</a>
            <div><a href="https://z.example">nested</a></div>
            </body></html>
        "#;

        let actual = extract(body);

        assert_eq!(actual.len(), 3);
        assert_eq!(actual[0].href(), "https://x.example");
        assert_eq!(actual[1].href(), "http://y.example/path?q=1");
        assert_eq!(actual[2].href(), "https://z.example");
        for (i, link) in actual.iter().enumerate() {
            assert_eq!(link.position, i);
            assert_eq!(link.seed(), SEED);
        }
    }

    #[test]
    fn test_extract__drops_relative_and_non_http_references() {
        let body = r##"
            <a href="/relative/path">relative</a>
            <a href="mailto:someone@example.com">mail</a>
            <a href="#fragment">fragment</a>
            <a href="javascript:void(0)">js</a>
            <a href="ftp://files.example">ftp</a>
        "##;

        assert_eq!(extract(body), vec![]);
    }

    #[test]
    fn test_extract__interleaved_references_keep_compact_positions() {
        let body = r#"
            <a href="https://x.example">x</a>
            <a href="/relative">relative</a>
            <a href="https://y.example">y</a>
        "#;

        let actual = extract(body);

        assert_eq!(actual.len(), 2);
        assert_eq!(actual[0].href(), "https://x.example");
        assert_eq!(actual[0].position, 0);
        assert_eq!(actual[1].href(), "https://y.example");
        assert_eq!(actual[1].position, 1);
    }

    #[test]
    fn test_extract__empty_document() {
        assert_eq!(extract(""), vec![]);
        assert_eq!(extract("<html><body>no anchors</body></html>"), vec![]);
    }

    #[test]
    fn test_extract__tolerates_malformed_markup() {
        // Unclosed tags and stray brackets must not abort extraction
        let body = r#"
            <html><body>
            <div><a href="https://x.example">first
            <a href="https://y.example">second</a></p></span>
            <<<not html>>>
        "#;

        let actual = extract(body);

        assert_eq!(actual.len(), 2);
        assert_eq!(actual[0].href(), "https://x.example");
        assert_eq!(actual[1].href(), "https://y.example");
    }

    #[test]
    fn test_extract__anchors_without_href_are_ignored() {
        let body = r#"<a name="top">no href</a><a href="https://x.example">x</a>"#;

        let actual = extract(body);

        assert_eq!(actual.len(), 1);
        assert_eq!(actual[0].href(), "https://x.example");
    }

    #[test]
    fn test_extract__duplicate_links_are_kept() {
        // No deduplication: the same target twice yields two candidates
        let body = r#"
            <a href="https://x.example">once</a>
            <a href="https://x.example">twice</a>
        "#;

        let actual = extract(body);

        assert_eq!(actual.len(), 2);
        assert_eq!(actual[0].href(), actual[1].href());
        assert_ne!(actual[0].position, actual[1].position);
    }
}
