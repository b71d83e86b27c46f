//! Search Scraper: result links for a hostname-scoped search.
//!
//! The live implementation scrapes one search provider's HTML results page.
//! Its selector path mirrors that page's current DOM, so markup changes on
//! the provider side silently degrade the popularity signal to zero links.
//! That is an accepted operational risk: callers treat "no links" as a
//! normal answer and the pipeline keeps going.

mod fetch;
mod parse;

use async_trait::async_trait;
use url::Url;

pub use self::fetch::HtmlSearchScraper;
pub use self::parse::{build_search_url, extract_result_links, RESULT_LINK_SELECTOR};

/// Capability to list search result links restricted to one hostname.
#[async_trait]
pub trait LinkSource: Send + Sync {
    /// Returns up to `max_results` result link URLs for `submitted_url`,
    /// restricted to `parsed_url`'s hostname.
    ///
    /// Never fails: transport and parse problems yield an empty list.
    async fn fetch_result_links(
        &self,
        submitted_url: &str,
        parsed_url: &Url,
        max_results: usize,
    ) -> Vec<String>;
}
