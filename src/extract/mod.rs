//! Feature Aggregator: one feature record per submitted URL.
//!
//! The pipeline runs search → HTTPS detection → DNS → geolocation, in that
//! order. Each collaborator failure degrades only its own fields; the only
//! error a caller can see is a malformed input URL, reported before any
//! outbound call.

mod extractor;
mod input;

pub use extractor::{detect_https, google_score, Extractor};
pub use input::{add_scheme, parse_input};
