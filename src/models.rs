//! Feature record data structures.
//!
//! Every value here is owned by a single extraction call. JSON field names
//! match the documents served by the `/json` endpoint.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// The feature record computed for one submitted URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlFeatures {
    /// The URL string exactly as submitted
    #[serde(rename = "Fullurl")]
    pub full_url: String,
    /// Popularity proxy in `[0, 1]`: `min(1, num_links / 251)`
    #[serde(rename = "GoogleScore")]
    pub google_score: f64,
    /// Number of result links found for the hostname
    #[serde(rename = "NumLinks")]
    pub num_links: usize,
    /// Scheme of the first result link on the same host was `https`
    #[serde(rename = "IsHttps")]
    pub is_https: bool,
    /// Hostname of the submitted URL
    #[serde(rename = "Hostname")]
    pub hostname: String,
    /// Length of the submitted URL string in bytes
    #[serde(rename = "Length")]
    pub length: usize,
    /// One entry per A record, in answer order
    #[serde(rename = "IPv4")]
    pub ipv4: Vec<IpFeatures>,
    /// One entry per MX record, in answer order
    #[serde(rename = "MXIPs")]
    pub mx_ips: Vec<MxFeatures>,
}

/// An address found in DNS, with its TTL and optional location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpFeatures {
    /// Address from the A answer. MX entries leave this unset.
    #[serde(rename = "IP")]
    pub ip: Option<IpAddr>,
    /// TTL in seconds as reported by the resolver
    #[serde(rename = "TTL")]
    pub ttl: u32,
    /// Absent if the lookup failed or was never issued
    #[serde(rename = "Geolocation")]
    pub geolocation: Option<Geolocation>,
}

impl IpFeatures {
    /// Entry for one A answer, not yet geolocated.
    pub fn from_a_record(ip: IpAddr, ttl: u32) -> Self {
        Self {
            ip: Some(ip),
            ttl,
            geolocation: None,
        }
    }
}

/// A mail exchanger found in DNS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MxFeatures {
    /// TTL of the MX record. No address or location is resolved for it.
    #[serde(flatten)]
    pub ip_features: IpFeatures,
    /// Mail exchange hostname, as written in the answer
    #[serde(rename = "Name")]
    pub name: String,
}

impl MxFeatures {
    /// Entry for one MX answer.
    pub fn from_mx_record(name: impl Into<String>, ttl: u32) -> Self {
        Self {
            ip_features: IpFeatures {
                ip: None,
                ttl,
                geolocation: None,
            },
            name: name.into(),
        }
    }
}

/// Snapshot of the geolocation provider's answer for one IP.
///
/// Missing fields decode to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geolocation {
    /// Address the provider answered for
    #[serde(rename = "IP", alias = "ip")]
    pub ip: String,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    /// Country name
    pub country_name: String,
    /// ISO 3166-2 region code, without the country prefix
    pub region_code: String,
    /// Region name
    pub region_name: String,
    /// City name
    pub city: String,
    /// Postal code
    #[serde(alias = "zIP_code")]
    pub zip_code: String,
    /// IANA time zone name
    pub time_zone: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Nielsen metro code (US only, zero elsewhere)
    pub metro_code: i64,
}
