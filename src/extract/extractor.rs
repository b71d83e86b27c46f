//! The extraction pipeline.

use std::sync::Arc;

use log::{debug, info, warn};
use url::Url;

use crate::config::{DEFAULT_GEOLOCATION_CONCURRENCY, DEFAULT_MAX_RESULTS, SCORE_NORMALIZER};
use crate::dns::HostResolver;
use crate::error_handling::{ExtractError, InfoType, ProcessingStats};
use crate::geolocation::{enrich, Geolocator};
use crate::models::UrlFeatures;
use crate::search::LinkSource;
use crate::utils::hostname;

use super::input::parse_input;

/// Normalized popularity score: `min(1, num_links / 251)`.
pub fn google_score(num_links: usize) -> f64 {
    (num_links as f64 / SCORE_NORMALIZER).min(1.0)
}

/// Host and scheme of a result link.
///
/// Relative references have no scheme; only protocol-relative ones
/// (`//host/path`) carry a host. `None` if the link is malformed.
fn link_host_and_scheme(link: &str) -> Option<(String, String)> {
    match Url::parse(link) {
        Ok(parsed) => Some((hostname(&parsed), parsed.scheme().to_string())),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let resolved = Url::parse("http://relative.invalid/")
                .and_then(|base| base.join(link))
                .ok()?;
            let host = if link.starts_with("//") {
                hostname(&resolved)
            } else {
                String::new()
            };
            Some((host, String::new()))
        }
        Err(_) => None,
    }
}

/// Scheme of the first result link whose host appears in the submitted URL.
///
/// A link without a host (a relative href) matches any submitted URL and
/// stops the scan with `false`. Malformed links are skipped. `false` when
/// nothing matches, so this only approximates whether the site serves HTTPS.
pub fn detect_https(submitted_url: &str, links: &[String]) -> bool {
    for link in links {
        let Some((host, scheme)) = link_host_and_scheme(link) else {
            debug!("Skipping malformed result link: {link}");
            continue;
        };
        if submitted_url.contains(host.as_str()) {
            return scheme == "https";
        }
    }
    false
}

/// Computes `UrlFeatures` from three replaceable collaborators.
///
/// The extractor holds no per-call state; one instance serves concurrent
/// extractions, each of which owns its own result.
pub struct Extractor {
    search: Arc<dyn LinkSource>,
    dns: Arc<dyn HostResolver>,
    geolocator: Arc<dyn Geolocator>,
    stats: Arc<ProcessingStats>,
    max_results: usize,
    geolocation_concurrency: usize,
}

impl Extractor {
    /// Creates an extractor requesting 100 search results and running up to
    /// four geolocation lookups at once.
    pub fn new(
        search: Arc<dyn LinkSource>,
        dns: Arc<dyn HostResolver>,
        geolocator: Arc<dyn Geolocator>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            search,
            dns,
            geolocator,
            stats,
            max_results: DEFAULT_MAX_RESULTS,
            geolocation_concurrency: DEFAULT_GEOLOCATION_CONCURRENCY,
        }
    }

    /// Sets the number of results requested from the search provider.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the maximum number of geolocation lookups in flight.
    pub fn with_geolocation_concurrency(mut self, concurrency: usize) -> Self {
        self.geolocation_concurrency = concurrency.max(1);
        self
    }

    /// Counters shared with the collaborators.
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Parses `raw` and runs the pipeline on it.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError` if `raw` is not a URL with a host. No outbound
    /// call is made in that case.
    pub async fn extract_str(&self, raw: &str) -> Result<UrlFeatures, ExtractError> {
        let parsed = parse_input(raw)?;
        Ok(self.extract(raw, &parsed).await)
    }

    /// Runs the pipeline for an already validated URL.
    ///
    /// `submitted_url` is the string as the caller sent it; it is used for
    /// `Fullurl`, `Length` and the HTTPS match. `parsed_url` supplies the
    /// hostname. Never fails: unreachable collaborators leave their fields
    /// empty.
    pub async fn extract(&self, submitted_url: &str, parsed_url: &Url) -> UrlFeatures {
        let links = self
            .search
            .fetch_result_links(submitted_url, parsed_url, self.max_results)
            .await;
        if links.is_empty() {
            self.stats.increment_info(InfoType::SearchNoLinks);
        }

        let mut features = UrlFeatures {
            full_url: submitted_url.to_string(),
            google_score: google_score(links.len()),
            num_links: links.len(),
            is_https: detect_https(submitted_url, &links),
            hostname: hostname(parsed_url),
            length: submitted_url.len(),
            ipv4: Vec::new(),
            mx_ips: Vec::new(),
        };

        if features.hostname.is_empty() {
            warn!("No hostname in {submitted_url}, skipping DNS and geolocation");
        } else {
            let (ipv4, mx_ips) = self.dns.resolve_host_features(&features.hostname).await;
            features.ipv4 = ipv4;
            features.mx_ips = mx_ips;

            enrich(
                &mut features.ipv4,
                self.geolocator.as_ref(),
                self.geolocation_concurrency,
            )
            .await;
        }

        self.stats.increment_extractions();
        info!(
            "Extracted {}: {} links (score {:.4}), https={}, {} A, {} MX",
            submitted_url,
            features.num_links,
            features.google_score,
            features.is_https,
            features.ipv4.len(),
            features.mx_ips.len()
        );

        features
    }
}
