//! Bounded, order-preserving geolocation fan-out.

use futures::stream::{self, StreamExt};

use super::Geolocator;
use crate::models::IpFeatures;

/// Geolocates every entry that has an address and stores the result in place.
///
/// At most `concurrency` lookups are in flight (a value of 0 is treated as 1).
/// Results are matched back to entries by position, so the slice order is
/// unchanged regardless of which lookup finishes first. A failed lookup
/// leaves that entry's location unset and does not affect the others.
pub async fn enrich(entries: &mut [IpFeatures], geolocator: &dyn Geolocator, concurrency: usize) {
    let addresses: Vec<_> = entries.iter().map(|entry| entry.ip).collect();

    let locations: Vec<_> = stream::iter(addresses)
        .map(|ip| async move {
            match ip {
                Some(ip) => geolocator.locate(ip).await,
                None => None,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    for (entry, location) in entries.iter_mut().zip(locations) {
        entry.geolocation = location;
    }
}
