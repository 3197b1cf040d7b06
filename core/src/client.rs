//! Stateless request builder and response parser for the processing API.
//!
//! # Design
//! `ApiClient` holds only a `base_url`. Fetching is split into
//! `build_fetch_content`, which produces an `HttpRequest`, and
//! `parse_fetch_content`, which consumes an `HttpResponse`. The host executes
//! the round-trip in between, keeping this crate free of I/O.

use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::ProcessedData;

/// Resource path of the processed sample, relative to the base URL.
pub const PROCESS_SAMPLE_PATH: &str = "/api/process-sample";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_fetch_content(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}{PROCESS_SAMPLE_PATH}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Interpret the backend's answer.
    ///
    /// A failure status wins over the body: only a non-empty string `error`
    /// field is read from it, and anything else in the body is ignored.
    pub fn parse_fetch_content(&self, response: HttpResponse) -> Result<ProcessedData, FetchError> {
        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                message: backend_error(&response.body),
            });
        }
        serde_json::from_slice(&response.body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

fn backend_error(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")
        .and_then(|error| error.as_str())
        .filter(|error| !error.is_empty())
        .map(str::to_string)
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
