//! Hostname helpers.

use url::{Host, Url};

/// The hostname of `url` without IPv6 brackets, or an empty string.
pub fn hostname(url: &Url) -> String {
    match url.host() {
        Some(Host::Ipv6(addr)) => addr.to_string(),
        Some(host) => host.to_string(),
        None => String::new(),
    }
}
