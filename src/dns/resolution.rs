//! Feature entries from DNS answers, with the partial-failure policy.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::records::{ARecord, MxRecord, RecordLookup};
use super::HostResolver;
use crate::error_handling::{InfoType, ProcessingStats};
use crate::models::{IpFeatures, MxFeatures};

/// Appends the root label unless `hostname` already ends with it.
pub fn fully_qualified(hostname: &str) -> String {
    if hostname.ends_with('.') {
        hostname.to_string()
    } else {
        format!("{hostname}.")
    }
}

/// Resolves A and MX features through a `RecordLookup`.
///
/// The two queries run concurrently. When exactly one of them fails:
/// - with `fail_fast` set, both sequences come back empty, discarding the
///   answers of the query that succeeded;
/// - otherwise the successful query's entries are kept and only the failed
///   kind is empty.
pub struct DnsFeatureResolver<L> {
    lookup: L,
    fail_fast: bool,
    stats: Arc<ProcessingStats>,
}

impl<L: RecordLookup> DnsFeatureResolver<L> {
    /// Creates a resolver over `lookup` with the given failure policy.
    pub fn new(lookup: L, fail_fast: bool, stats: Arc<ProcessingStats>) -> Self {
        Self {
            lookup,
            fail_fast,
            stats,
        }
    }

    /// Whether a single failed query empties both results.
    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }
}

fn ip_features(records: Vec<ARecord>) -> Vec<IpFeatures> {
    records
        .into_iter()
        .map(|record| IpFeatures::from_a_record(IpAddr::V4(record.ip), record.ttl))
        .collect()
}

fn mx_features(records: Vec<MxRecord>) -> Vec<MxFeatures> {
    records
        .into_iter()
        .map(|record| MxFeatures::from_mx_record(record.exchange, record.ttl))
        .collect()
}

#[async_trait]
impl<L: RecordLookup> HostResolver for DnsFeatureResolver<L> {
    async fn resolve_host_features(&self, hostname: &str) -> (Vec<IpFeatures>, Vec<MxFeatures>) {
        let fqdn = fully_qualified(hostname);
        let (a_result, mx_result) =
            tokio::join!(self.lookup.lookup_a(&fqdn), self.lookup.lookup_mx(&fqdn));
        let (a_ok, mx_ok) = (a_result.is_ok(), mx_result.is_ok());

        let (a_records, mx_records) = match (a_result, mx_result) {
            (Ok(a), Ok(mx)) => (a, mx),
            (Err(a_err), Err(mx_err)) => {
                warn!("DNS lookups for {fqdn} failed: A: {a_err}; MX: {mx_err}");
                return (Vec::new(), Vec::new());
            }
            (Err(e), Ok(_)) if self.fail_fast => {
                self.stats.increment_info(InfoType::DnsResultsSuppressed);
                warn!("A lookup for {fqdn} failed, discarding MX answers: {e}");
                return (Vec::new(), Vec::new());
            }
            (Ok(_), Err(e)) if self.fail_fast => {
                self.stats.increment_info(InfoType::DnsResultsSuppressed);
                warn!("MX lookup for {fqdn} failed, discarding A answers: {e}");
                return (Vec::new(), Vec::new());
            }
            (Err(e), Ok(mx)) => {
                warn!("A lookup for {fqdn} failed, keeping MX answers: {e}");
                (Vec::new(), mx)
            }
            (Ok(a), Err(e)) => {
                warn!("MX lookup for {fqdn} failed, keeping A answers: {e}");
                (a, Vec::new())
            }
        };

        if a_ok && a_records.is_empty() {
            self.stats.increment_info(InfoType::DnsNoARecords);
        }
        if mx_ok && mx_records.is_empty() {
            self.stats.increment_info(InfoType::DnsNoMxRecords);
        }
        debug!(
            "{fqdn}: {} A records, {} MX records",
            a_records.len(),
            mx_records.len()
        );

        (ip_features(a_records), mx_features(mx_records))
    }
}
