//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::SocketAddr;

use clap::{Args, ValueEnum};

use crate::config::constants::{
    DEFAULT_DNS_SERVER, DEFAULT_DNS_TIMEOUT_MS, DEFAULT_GEOLOCATION_CONCURRENCY,
    DEFAULT_GEOLOCATION_ENDPOINT, DEFAULT_MAX_RESULTS, DEFAULT_SEARCH_ENDPOINT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// Derives `clap::Args` so the binary can flatten it into its command line,
/// but it can equally be constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use url_features::Config;
///
/// let config = Config {
///     geolocation_concurrency: 8,
///     dns_fail_fast: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Log level
    #[arg(long, value_enum, default_value = "info", env = "URL_FEATURES_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain", env = "URL_FEATURES_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds for search and geolocation calls
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "URL_FEATURES_TIMEOUT")]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, env = "URL_FEATURES_USER_AGENT")]
    pub user_agent: String,

    /// DNS resolver address used for A and MX queries
    #[arg(long, default_value = DEFAULT_DNS_SERVER, env = "URL_FEATURES_DNS_SERVER")]
    pub dns_server: SocketAddr,

    /// DNS query timeout in milliseconds, per attempt
    #[arg(long, default_value_t = DEFAULT_DNS_TIMEOUT_MS, env = "URL_FEATURES_DNS_TIMEOUT_MS")]
    pub dns_timeout_ms: u64,

    /// Discard both A and MX results when either query fails
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, env = "URL_FEATURES_DNS_FAIL_FAST")]
    pub dns_fail_fast: bool,

    /// Search results page endpoint
    #[arg(long, default_value = DEFAULT_SEARCH_ENDPOINT, env = "URL_FEATURES_SEARCH_ENDPOINT")]
    pub search_endpoint: String,

    /// Number of results requested from the search endpoint
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS, env = "URL_FEATURES_MAX_RESULTS")]
    pub max_results: usize,

    /// Geolocation endpoint prefix; the IP address is appended to it
    #[arg(long, default_value = DEFAULT_GEOLOCATION_ENDPOINT, env = "URL_FEATURES_GEOLOCATION_ENDPOINT")]
    pub geolocation_endpoint: String,

    /// Maximum concurrent geolocation lookups per extraction
    #[arg(long, default_value_t = DEFAULT_GEOLOCATION_CONCURRENCY, env = "URL_FEATURES_GEOLOCATION_CONCURRENCY")]
    pub geolocation_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            dns_server: SocketAddr::from(([8, 8, 8, 8], 53)),
            dns_timeout_ms: DEFAULT_DNS_TIMEOUT_MS,
            dns_fail_fast: true,
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            geolocation_endpoint: DEFAULT_GEOLOCATION_ENDPOINT.to_string(),
            geolocation_concurrency: DEFAULT_GEOLOCATION_CONCURRENCY,
        }
    }
}
