//! HTTP client for the student API.

pub mod client;
pub mod types;

// Re-export main types
pub use client::ApiClient;
