//! HTTP client module with upstream status classification.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{UpstreamError, classify_status};
