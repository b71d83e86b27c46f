//! url_features library: popularity, transport and DNS features for a URL
//!
//! This library computes a `UrlFeatures` record for a submitted URL from three
//! network collaborators:
//! - a search provider (how many result links exist for the hostname, and
//!   whether the first one on the same host is served over HTTPS)
//! - DNS (A and MX records, with TTLs)
//! - a geolocation provider (one location per resolved IPv4 address)
//!
//! Collaborator failures degrade individual fields; only malformed input is
//! reported as an error.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use url_features::{init_extractor, Config, ProcessingStats};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let stats = Arc::new(ProcessingStats::new());
//! let extractor = init_extractor(&Config::default(), stats)?;
//!
//! let features = extractor.extract_str("example.com").await?;
//! println!("{} links, {} A records", features.num_links, features.ipv4.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod extract;
pub mod geolocation;
pub mod initialization;
pub mod models;
pub mod search;
pub mod server;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExtractError, InitializationError, ProcessingStats};
pub use extract::Extractor;
pub use initialization::init_extractor;
pub use models::{Geolocation, IpFeatures, MxFeatures, UrlFeatures};
