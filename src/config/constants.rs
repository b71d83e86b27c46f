//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including outbound endpoints, timeouts and scoring parameters.

/// Number of result links requested from the search provider per query.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Link count at which the popularity score saturates at 1.0.
///
/// This is the number of links the search provider returns when queried for
/// its own hostname, so every other site scores relative to it.
pub const SCORE_NORMALIZER: f64 = 251.0;

/// Minimum href length for an anchor to count as a result link.
///
/// Shorter hrefs are fragments and in-page navigation (`#`, `/`, `?q=`).
pub const MIN_LINK_LENGTH: usize = 8;

/// Default search endpoint (HTML results page).
pub const DEFAULT_SEARCH_ENDPOINT: &str = "http://www.google.com/search";

/// Default geolocation endpoint. The textual IP is appended to this prefix.
pub const DEFAULT_GEOLOCATION_ENDPOINT: &str = "https://freegeoip.app/json/";

/// Default DNS resolver address (Google Public DNS).
pub const DEFAULT_DNS_SERVER: &str = "8.8.8.8:53";

/// Port the HTTP server binds when none is given.
pub const DEFAULT_PORT: u16 = 8989;

/// Per-request HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// DNS query timeout in milliseconds
/// Most queries complete in well under a second against a public resolver.
pub const DEFAULT_DNS_TIMEOUT_MS: u64 = 3000;

/// DNS attempts per query before the lookup is treated as a transport failure.
pub const DNS_ATTEMPTS: usize = 2;

/// Maximum number of geolocation lookups in flight for one extraction.
pub const DEFAULT_GEOLOCATION_CONCURRENCY: usize = 4;

/// Default User-Agent string for outbound HTTP requests.
///
/// The search provider serves different markup (or blocks outright) when the
/// request comes from a non-browser client, so a realistic desktop Chrome
/// string is sent on every search and geolocation request.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
