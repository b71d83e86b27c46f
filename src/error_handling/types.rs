//! Error type definitions.
//!
//! This module defines the error and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Input errors: the only failures that escape an extraction.
///
/// Both variants are raised before any outbound call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The submitted string is not a parseable URL.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The string as submitted
        url: String,
        /// Underlying parse failure
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but names no host to look up.
    #[error("URL '{0}' has no host")]
    MissingHost(String),
}

/// Collaborator failures recovered during an extraction.
///
/// None of these abort the extraction; each one degrades a single field to
/// its empty form and bumps the matching counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Search provider
    /// Search request exceeded the client timeout
    SearchRequestTimeout,
    /// Search request failed to connect or send
    SearchRequestError,
    /// Search provider answered with a non-success status
    SearchStatusError,
    /// Search response body could not be read
    SearchBodyError,
    // DNS
    /// A query timed out
    DnsATimeout,
    /// A query failed
    DnsALookupError,
    /// MX query timed out
    DnsMxTimeout,
    /// MX query failed
    DnsMxLookupError,
    // Geolocation provider
    /// Geolocation request exceeded the client timeout
    GeolocationRequestTimeout,
    /// Geolocation request failed to connect or send
    GeolocationRequestError,
    /// Geolocation provider answered with a non-success status
    GeolocationStatusError,
    /// Geolocation body was not a location document
    GeolocationDecodeError,
}

/// Notable outcomes that are valid results rather than failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Search returned a page with no anchors under the result containers.
    SearchNoLinks,
    /// The hostname has no A records.
    DnsNoARecords,
    /// The hostname has no MX records.
    DnsNoMxRecords,
    /// One DNS query failed and fail-fast discarded the other's answers.
    DnsResultsSuppressed,
}
