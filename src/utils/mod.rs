//! Shared helpers.
//!
//! This module provides:
//! - CSS selector parsing with a match-nothing fallback
//! - Hostname extraction from parsed URLs

mod host;
mod selector;

pub use host::hostname;
pub use selector::parse_selector_with_fallback;
