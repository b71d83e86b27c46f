//! Server HTTP handlers.

mod features;
mod status;

pub use features::{features_html_handler, features_json_handler};
pub use status::status_handler;
