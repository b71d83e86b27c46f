//! Error categorization.
//!
//! Maps transport errors from each collaborator onto an `ErrorType`.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::RecordType;

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` raised while querying the search provider.
pub fn categorize_search_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::SearchRequestTimeout
    } else if error.is_status() {
        ErrorType::SearchStatusError
    } else if error.is_body() || error.is_decode() {
        ErrorType::SearchBodyError
    } else {
        ErrorType::SearchRequestError
    }
}

/// Categorizes a `reqwest::Error` raised while querying the geolocation provider.
pub fn categorize_geolocation_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::GeolocationRequestTimeout
    } else if error.is_status() {
        ErrorType::GeolocationStatusError
    } else if error.is_body() || error.is_decode() {
        ErrorType::GeolocationDecodeError
    } else {
        ErrorType::GeolocationRequestError
    }
}

/// Categorizes a DNS transport failure for the given query type.
///
/// Only A and MX queries are issued; any other type is reported as an A failure.
pub fn categorize_dns_error(record_type: RecordType, error: &ResolveError) -> ErrorType {
    let timed_out = matches!(error.kind(), ResolveErrorKind::Timeout);
    match (record_type, timed_out) {
        (RecordType::MX, true) => ErrorType::DnsMxTimeout,
        (RecordType::MX, false) => ErrorType::DnsMxLookupError,
        (_, true) => ErrorType::DnsATimeout,
        (_, false) => ErrorType::DnsALookupError,
    }
}

/// Whether a resolver error means "the name has no records of this type".
///
/// An empty answer (including NXDOMAIN) is a legitimate outcome, not a
/// transport failure.
pub fn is_no_records(error: &ResolveError) -> bool {
    matches!(error.kind(), ResolveErrorKind::NoRecordsFound { .. })
}
