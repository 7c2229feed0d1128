//! Hyperlink collection and resolution

use scraper::{Html, Selector};
use std::sync::OnceLock;
use tracing::debug;
use url::Url;

static LINK_SELECTOR: OnceLock<Selector> = OnceLock::new();
static BASE_SELECTOR: OnceLock<Selector> = OnceLock::new();

fn link_selector() -> &'static Selector {
    LINK_SELECTOR.get_or_init(|| Selector::parse("a[href], area[href]").expect("link selector"))
}

fn base_selector() -> &'static Selector {
    BASE_SELECTOR.get_or_init(|| Selector::parse("base[href]").expect("base selector"))
}

/// Resolved `href` targets in document order, duplicates kept
pub(crate) fn collect_links(document: &Html, base_url: &str) -> Vec<Url> {
    let request_base = match Url::parse(base_url) {
        Ok(url) => Some(url),
        Err(err) => {
            debug!(base_url, %err, "invalid base URL, relative links will be dropped");
            None
        }
    };
    let base = document_base(document, request_base.as_ref()).or(request_base);

    document
        .select(link_selector())
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve(base.as_ref(), href))
        .collect()
}

/// The first `<base href>`, if it resolves to something usable as a base
fn document_base(document: &Html, request_base: Option<&Url>) -> Option<Url> {
    let href = document
        .select(base_selector())
        .next()?
        .value()
        .attr("href")?;

    resolve(request_base, href).filter(|url| !url.cannot_be_a_base())
}

fn resolve(base: Option<&Url>, href: &str) -> Option<Url> {
    if href.trim().is_empty() {
        debug!(href, "dropping empty link");
        return None;
    }

    let resolved = match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    };

    match resolved {
        Ok(url) => Some(url),
        Err(err) => {
            debug!(href, %err, "dropping unresolvable link");
            None
        }
    }
}
