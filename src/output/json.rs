//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T> {
    /// The normalized records
    pub data: &'a [T],

    /// Metadata about the output
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced
    pub timestamp: String,

    /// resview version
    pub version: String,

    /// Number of records in `data`
    pub count: usize,
}

impl<'a, T> JsonOutput<'a, T> {
    /// Create a new JSON output with metadata
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                count: data.len(),
            },
        }
    }
}

/// Format records as pretty-printed JSON
pub fn format_json<T: Serialize>(data: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
