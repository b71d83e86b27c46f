//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP client (user-agent and timeouts)
//! - DNS resolver bound to one server
//! - Logger
//! - The fully wired feature extractor

mod client;
mod logger;
mod resolver;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::dns::{DnsFeatureResolver, HickoryRecordLookup};
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::extract::Extractor;
use crate::geolocation::HttpGeolocator;
use crate::search::HtmlSearchScraper;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Builds an `Extractor` backed by the live search, DNS and geolocation services.
///
/// All three collaborators record their recovered failures in `stats`.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
pub fn init_extractor(
    config: &Config,
    stats: Arc<ProcessingStats>,
) -> Result<Extractor, InitializationError> {
    let client = init_client(config)?;
    let resolver = init_resolver(
        config.dns_server,
        Duration::from_millis(config.dns_timeout_ms),
    );

    let scraper = HtmlSearchScraper::new(
        Arc::clone(&client),
        config.search_endpoint.clone(),
        Arc::clone(&stats),
    );
    let dns = DnsFeatureResolver::new(
        HickoryRecordLookup::new(resolver, Arc::clone(&stats)),
        config.dns_fail_fast,
        Arc::clone(&stats),
    );
    let geolocator = HttpGeolocator::new(
        client,
        config.geolocation_endpoint.clone(),
        Arc::clone(&stats),
    );

    Ok(Extractor::new(
        Arc::new(scraper),
        Arc::new(dns),
        Arc::new(geolocator),
        stats,
    )
    .with_max_results(config.max_results)
    .with_geolocation_concurrency(config.geolocation_concurrency))
}
