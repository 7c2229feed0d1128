//! Single-pass extraction entry point

use crate::links::collect_links;
use crate::text::visible_text;
use scraper::Html;
use url::Url;

/// Text and links pulled from one document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Human-visible text, whitespace collapsed
    pub text: String,
    /// Resolved hyperlink targets in document order
    pub links: Vec<Url>,
}

/// Parse `html` and pull out its visible text and links.
///
/// Never fails: the parser recovers from any malformed markup and links that
/// cannot be resolved against `base_url` are skipped. Nothing is fetched or
/// executed.
pub fn extract(base_url: &str, html: &str) -> Extraction {
    let document = Html::parse_document(html);

    Extraction {
        text: visible_text(&document),
        links: collect_links(&document, base_url),
    }
}
