//! Types for talking to the student API.
//!
//! Request bodies are typed; responses are read as `serde_json::Value` and
//! handed to the lenient parser because the API's field types vary.

use serde::Deserialize;

/// Raw profile bundle from `/students/{id}/pro` (parsed later)
pub type RawBundle = serde_json::Value;

/// Error body the API sends alongside non-success statuses
#[derive(Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

impl ApiMessage {
    /// Best human-readable message from a response body
    pub fn from_body(body: &str) -> String {
        serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.message)
            .unwrap_or_else(|| body.trim().to_string())
    }
}

/// HTTP verb of an API operation, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}
