//! Server state and response types.

use std::sync::Arc;
use std::time::Instant;

use askama::Template;
use askama_web::WebTemplate;
use serde::Serialize;

use crate::error_handling::ProcessingStats;
use crate::extract::Extractor;
use crate::models::{Geolocation, IpFeatures, MxFeatures, UrlFeatures};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Pipeline shared by all requests
    pub extractor: Arc<Extractor>,
    /// Counters the pipeline records into
    pub stats: Arc<ProcessingStats>,
    /// Server start, for uptime
    pub start_time: Arc<Instant>,
}

impl AppState {
    /// State around `extractor`, reusing its counters.
    pub fn new(extractor: Extractor) -> Self {
        let stats = Arc::clone(extractor.stats());
        Self {
            extractor: Arc::new(extractor),
            stats,
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// JSON response for `/status`
#[derive(Serialize)]
pub struct StatusResponse {
    /// Seconds since the server started
    pub uptime_seconds: f64,
    /// Extractions completed
    pub extractions: usize,
    /// Recovered collaborator failures
    pub errors: ErrorCounts,
    /// Valid but notable outcomes
    pub info: InfoCounts,
}

/// Recovered failures, by collaborator
#[derive(Serialize)]
pub struct ErrorCounts {
    pub total: usize,
    pub search: usize,
    pub dns: usize,
    pub geolocation: usize,
}

/// Informational outcomes, by kind
#[derive(Serialize)]
pub struct InfoCounts {
    pub total: usize,
    pub search_no_links: usize,
    pub dns_no_a_records: usize,
    pub dns_no_mx_records: usize,
    pub dns_results_suppressed: usize,
}

/// One address row of the HTML page.
pub struct IpRow {
    pub ip: String,
    pub ttl: u32,
    pub location: String,
}

/// One mail exchanger row of the HTML page.
pub struct MxRow {
    pub name: String,
    pub ttl: u32,
}

/// HTML feature page.
#[derive(Template, WebTemplate)]
#[template(path = "features.html")]
pub struct FeaturesTemplate {
    pub full_url: String,
    pub hostname: String,
    pub google_score: String,
    pub num_links: usize,
    pub is_https: bool,
    pub length: usize,
    pub ips: Vec<IpRow>,
    pub mxs: Vec<MxRow>,
}

fn describe_location(location: Option<&Geolocation>) -> String {
    let Some(location) = location else {
        return "unknown".to_string();
    };
    let place: Vec<&str> = [
        location.city.as_str(),
        location.region_name.as_str(),
        location.country_name.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    match (place.is_empty(), location.country_code.is_empty()) {
        (true, true) => "unknown".to_string(),
        (true, false) => location.country_code.clone(),
        (false, true) => place.join(", "),
        (false, false) => format!("{} ({})", place.join(", "), location.country_code),
    }
}

impl From<&IpFeatures> for IpRow {
    fn from(entry: &IpFeatures) -> Self {
        Self {
            ip: entry
                .ip
                .map(|ip| ip.to_string())
                .unwrap_or_else(|| "-".to_string()),
            ttl: entry.ttl,
            location: describe_location(entry.geolocation.as_ref()),
        }
    }
}

impl From<&MxFeatures> for MxRow {
    fn from(entry: &MxFeatures) -> Self {
        Self {
            name: entry.name.clone(),
            ttl: entry.ip_features.ttl,
        }
    }
}

impl From<&UrlFeatures> for FeaturesTemplate {
    fn from(features: &UrlFeatures) -> Self {
        Self {
            full_url: features.full_url.clone(),
            hostname: features.hostname.clone(),
            google_score: format!("{:.4}", features.google_score),
            num_links: features.num_links,
            is_https: features.is_https,
            length: features.length,
            ips: features.ipv4.iter().map(IpRow::from).collect(),
            mxs: features.mx_ips.iter().map(MxRow::from).collect(),
        }
    }
}
