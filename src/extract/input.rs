//! Input URL normalization and validation.

use url::Url;

use crate::error_handling::ExtractError;

/// Prefixes `http://` unless `raw` already names an http or https scheme.
///
/// Bare hostnames such as `example.com` are otherwise not absolute URLs.
pub fn add_scheme(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    }
}

/// Normalizes and parses a submitted URL string.
///
/// # Errors
///
/// - `ExtractError::InvalidUrl` if the normalized string does not parse
/// - `ExtractError::MissingHost` if it parses but has no host
pub fn parse_input(raw: &str) -> Result<Url, ExtractError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(&add_scheme(trimmed)).map_err(|source| ExtractError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(ExtractError::MissingHost(raw.to_string())),
    }
}
