//! Geolocation Enricher: location records for resolved addresses.
//!
//! This module provides:
//! - `Geolocator`, the per-IP lookup capability
//! - `HttpGeolocator`, backed by a JSON geolocation HTTP service
//! - `enrich`, a bounded fan-out that fills every entry in place

mod enrich;
mod http;

use std::net::IpAddr;

use async_trait::async_trait;

use crate::models::Geolocation;

// Re-export public API
pub use enrich::enrich;
pub use http::HttpGeolocator;

/// Capability to geolocate a single IP address.
///
/// Implementations hold no per-call mutable state, so lookups for different
/// addresses may run concurrently and in any order.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Returns the location of `ip`, or `None` if the lookup failed.
    async fn locate(&self, ip: IpAddr) -> Option<Geolocation>;
}
