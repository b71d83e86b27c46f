//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that is valid but matches no element.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). Scraping then yields no results instead of panicking, which
/// callers already treat as a valid outcome.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "search result links")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        #[allow(clippy::expect_used)]
        Selector::parse(MATCH_NOTHING)
            .expect("Fallback selector '*:not(*)' should always parse - this is a programming error")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_valid_selector_matches() {
        let selector = parse_selector_with_fallback("#res a", "test");
        let doc = Html::parse_document(r#"<div id="res"><a href="x">x</a></div>"#);
        assert_eq!(doc.select(&selector).count(), 1);
    }

    #[test]
    fn test_invalid_selector_falls_back_to_match_nothing() {
        let selector = parse_selector_with_fallback("div[[[", "test");
        let doc = Html::parse_document(r#"<div id="res"><a href="x">x</a></div>"#);
        assert_eq!(doc.select(&selector).count(), 0);
    }
}
