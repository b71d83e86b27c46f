//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization and input errors)
//! - Categorization of collaborator transport failures
//! - Processing statistics tracking (recovered errors, info metrics)
//!
//! Only input errors ever reach a caller. Collaborator failures are counted
//! here and degrade a single field of the feature record.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_dns_error, categorize_geolocation_error, categorize_search_error, is_no_records,
};
pub use stats::ProcessingStats;
pub use types::{ErrorType, ExtractError, InfoType, InitializationError};
