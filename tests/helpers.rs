// Shared in-process collaborators for extraction tests.
//
// Each fake counts its calls so tests can assert that rejected input never
// reaches the network.

#![allow(dead_code)] // Not every test file uses every fake

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use url_features::dns::HostResolver;
use url_features::geolocation::Geolocator;
use url_features::search::LinkSource;
use url_features::{Extractor, Geolocation, IpFeatures, MxFeatures, ProcessingStats};

/// Call counters shared by the fakes of one extractor.
#[derive(Default)]
pub struct Calls {
    pub search: AtomicUsize,
    pub dns: AtomicUsize,
    pub geolocation: AtomicUsize,
}

impl Calls {
    pub fn total(&self) -> usize {
        self.search.load(Ordering::SeqCst)
            + self.dns.load(Ordering::SeqCst)
            + self.geolocation.load(Ordering::SeqCst)
    }
}

pub struct FakeSearch {
    pub links: Vec<String>,
    pub calls: Arc<Calls>,
}

#[async_trait]
impl LinkSource for FakeSearch {
    async fn fetch_result_links(&self, _: &str, _: &Url, max_results: usize) -> Vec<String> {
        self.calls.search.fetch_add(1, Ordering::SeqCst);
        self.links.iter().take(max_results).cloned().collect()
    }
}

pub struct FakeDns {
    pub a: Vec<(&'static str, u32)>,
    pub mx: Vec<(&'static str, u32)>,
    pub calls: Arc<Calls>,
}

#[async_trait]
impl HostResolver for FakeDns {
    async fn resolve_host_features(&self, _: &str) -> (Vec<IpFeatures>, Vec<MxFeatures>) {
        self.calls.dns.fetch_add(1, Ordering::SeqCst);
        let a = self
            .a
            .iter()
            .map(|(ip, ttl)| IpFeatures::from_a_record(ip.parse().unwrap(), *ttl))
            .collect();
        let mx = self
            .mx
            .iter()
            .map(|(name, ttl)| MxFeatures::from_mx_record(*name, *ttl))
            .collect();
        (a, mx)
    }
}

/// Answers from a fixed table; addresses missing from it fail.
pub struct FakeGeolocator {
    pub known: HashMap<IpAddr, &'static str>,
    pub calls: Arc<Calls>,
}

#[async_trait]
impl Geolocator for FakeGeolocator {
    async fn locate(&self, ip: IpAddr) -> Option<Geolocation> {
        self.calls.geolocation.fetch_add(1, Ordering::SeqCst);
        self.known.get(&ip).map(|country| Geolocation {
            ip: ip.to_string(),
            country_code: country.to_string(),
            ..Default::default()
        })
    }
}

/// Canned answers for one extractor.
pub struct Scenario {
    pub links: Vec<String>,
    pub a: Vec<(&'static str, u32)>,
    pub mx: Vec<(&'static str, u32)>,
    pub known: Vec<(&'static str, &'static str)>,
}

impl Scenario {
    /// Ten result links, the first on `https://example.com`, two A records
    /// and one MX record, all geolocated.
    pub fn example_com() -> Self {
        let mut links = vec!["https://example.com/page".to_string()];
        links.extend((1..10).map(|i| format!("http://example.com/p{i}")));
        Self {
            links,
            a: vec![("93.184.216.34", 3600), ("93.184.216.35", 3600)],
            mx: vec![("mail.example.com.", 300)],
            known: vec![("93.184.216.34", "US"), ("93.184.216.35", "NL")],
        }
    }

    pub fn build(self) -> (Extractor, Arc<Calls>, Arc<ProcessingStats>) {
        let calls = Arc::new(Calls::default());
        let stats = Arc::new(ProcessingStats::new());
        let known = self
            .known
            .into_iter()
            .map(|(ip, country)| (ip.parse().unwrap(), country))
            .collect();
        let extractor = Extractor::new(
            Arc::new(FakeSearch {
                links: self.links,
                calls: Arc::clone(&calls),
            }),
            Arc::new(FakeDns {
                a: self.a,
                mx: self.mx,
                calls: Arc::clone(&calls),
            }),
            Arc::new(FakeGeolocator {
                known,
                calls: Arc::clone(&calls),
            }),
            Arc::clone(&stats),
        );
        (extractor, calls, stats)
    }
}
