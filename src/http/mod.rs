//! HTTP client module with response classification.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{RequestError, classify_status};
