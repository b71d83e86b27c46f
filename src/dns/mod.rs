//! DNS Resolver: A and MX records for a hostname.
//!
//! This module splits DNS work in two layers:
//! - `RecordLookup`: raw A/MX queries against one server (`hickory-resolver`)
//! - `DnsFeatureResolver`: turns answers into feature entries and applies the
//!   fail-fast policy when a query fails
//!
//! Both query types are issued for `hostname.` so search domains never apply.

mod records;
mod resolution;

use async_trait::async_trait;

use crate::models::{IpFeatures, MxFeatures};

// Re-export public API
pub use records::{ARecord, HickoryRecordLookup, MxRecord, RecordLookup};
pub use resolution::{fully_qualified, DnsFeatureResolver};

/// Capability to resolve the DNS features of a hostname.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns one entry per A answer and one per MX answer, in answer order.
    ///
    /// Never fails: a transport failure yields empty sequences according to
    /// the implementation's policy. Zero answers is a valid result.
    async fn resolve_host_features(&self, hostname: &str) -> (Vec<IpFeatures>, Vec<MxFeatures>);
}
