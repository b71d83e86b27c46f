//! Live search provider client.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use url::Url;

use super::parse::{build_search_url, extract_result_links};
use super::LinkSource;
use crate::error_handling::{categorize_search_error, ProcessingStats};
use crate::utils::hostname;

/// Scrapes result links from an HTML search results page.
///
/// Requests go through the shared client, which carries the browser
/// User-Agent and per-request timeout.
pub struct HtmlSearchScraper {
    client: Arc<reqwest::Client>,
    endpoint: String,
    stats: Arc<ProcessingStats>,
}

impl HtmlSearchScraper {
    /// Creates a scraper querying `endpoint` (e.g. `http://www.google.com/search`).
    pub fn new(
        client: Arc<reqwest::Client>,
        endpoint: String,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            endpoint,
            stats,
        }
    }

    async fn fetch_results_page(&self, query: Url) -> Result<String, reqwest::Error> {
        self.client
            .get(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl LinkSource for HtmlSearchScraper {
    async fn fetch_result_links(
        &self,
        submitted_url: &str,
        parsed_url: &Url,
        max_results: usize,
    ) -> Vec<String> {
        let hostname = hostname(parsed_url);
        let query = match build_search_url(&self.endpoint, submitted_url, &hostname, max_results) {
            Ok(query) => query,
            Err(e) => {
                warn!("Invalid search endpoint '{}': {e}", self.endpoint);
                return Vec::new();
            }
        };

        info!("Running search query {query}");

        let body = match self.fetch_results_page(query).await {
            Ok(body) => body,
            Err(e) => {
                self.stats.increment_error(categorize_search_error(&e));
                warn!("Search request for {hostname} failed: {e}");
                return Vec::new();
            }
        };

        let links = extract_result_links(&body);
        debug!(
            "Found {} result links for {hostname} in {} bytes of markup",
            links.len(),
            body.len()
        );
        links
    }
}
