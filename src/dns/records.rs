//! Raw A and MX queries.

use std::net::Ipv4Addr;
use std::sync::Arc;

use anyhow::{Error, Result};
use async_trait::async_trait;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::{categorize_dns_error, is_no_records, ProcessingStats};

/// One A answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ARecord {
    /// Address
    pub ip: Ipv4Addr,
    /// TTL in seconds
    pub ttl: u32,
}

/// One MX answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    /// Preference (lower is preferred)
    pub preference: u16,
    /// Mail exchange hostname, fully qualified with trailing dot
    pub exchange: String,
    /// TTL in seconds
    pub ttl: u32,
}

/// Raw record queries against a DNS server.
///
/// `Ok(vec![])` means the name has no records of that type (including
/// NXDOMAIN). `Err` means the query itself failed.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Queries A records for a fully qualified name.
    async fn lookup_a(&self, fqdn: &str) -> Result<Vec<ARecord>>;

    /// Queries MX records for a fully qualified name.
    async fn lookup_mx(&self, fqdn: &str) -> Result<Vec<MxRecord>>;
}

/// `RecordLookup` backed by a `hickory-resolver` client.
pub struct HickoryRecordLookup {
    resolver: Arc<TokioAsyncResolver>,
    stats: Arc<ProcessingStats>,
}

impl HickoryRecordLookup {
    /// Wraps a resolver; transport failures are counted in `stats`.
    pub fn new(resolver: Arc<TokioAsyncResolver>, stats: Arc<ProcessingStats>) -> Self {
        Self { resolver, stats }
    }

    async fn lookup_records<T: Send>(
        &self,
        fqdn: &str,
        record_type: RecordType,
        decode: impl Fn(&RData, u32) -> Option<T> + Send,
    ) -> Result<Vec<T>> {
        match self.resolver.lookup(fqdn, record_type).await {
            Ok(lookup) => Ok(lookup
                .record_iter()
                .filter_map(|record| record.data().and_then(|rdata| decode(rdata, record.ttl())))
                .collect()),
            Err(e) if is_no_records(&e) => {
                log::debug!("No {record_type} records for {fqdn}");
                Ok(Vec::new())
            }
            Err(e) => {
                self.stats.increment_error(categorize_dns_error(record_type, &e));
                log::warn!("{record_type} lookup for {fqdn} failed: {e}");
                Err(Error::new(e))
            }
        }
    }
}

#[async_trait]
impl RecordLookup for HickoryRecordLookup {
    async fn lookup_a(&self, fqdn: &str) -> Result<Vec<ARecord>> {
        self.lookup_records(fqdn, RecordType::A, |rdata, ttl| match rdata {
            RData::A(a) => Some(ARecord { ip: a.0, ttl }),
            _ => None,
        })
        .await
    }

    async fn lookup_mx(&self, fqdn: &str) -> Result<Vec<MxRecord>> {
        self.lookup_records(fqdn, RecordType::MX, |rdata, ttl| match rdata {
            RData::MX(mx) => Some(MxRecord {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
                ttl,
            }),
            _ => None,
        })
        .await
    }
}
