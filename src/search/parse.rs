//! Search query construction and results page parsing.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::config::MIN_LINK_LENGTH;
use crate::utils::parse_selector_with_fallback;

/// Anchors inside the search region of the results container.
pub const RESULT_LINK_SELECTOR: &str = "#res #search a[href]";

static RESULT_LINKS: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(RESULT_LINK_SELECTOR, "search result links"));

/// Builds the results page URL for a hostname-restricted query.
///
/// The submitted string is the search phrase; `as_sitesearch` limits hits to
/// `hostname`. Parameters are form-encoded.
///
/// # Errors
///
/// Returns a `url::ParseError` if `endpoint` is not an absolute URL.
pub fn build_search_url(
    endpoint: &str,
    submitted_url: &str,
    hostname: &str,
    max_results: usize,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut()
        .append_pair("hl", "en")
        .append_pair("num", &max_results.to_string())
        .append_pair("q", submitted_url)
        .append_pair("as_sitesearch", hostname);
    Ok(url)
}

/// Extracts result link hrefs from a results page, in document order.
///
/// Anchors outside `#res #search` and hrefs shorter than `MIN_LINK_LENGTH`
/// are skipped. Returns an empty list when nothing matches.
pub fn extract_result_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&RESULT_LINKS)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.len() >= MIN_LINK_LENGTH)
        .map(str::to_string)
        .collect()
}
