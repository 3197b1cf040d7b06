//! Executes the core's `HttpRequest` over the network.
//!
//! # Design
//! The core never performs I/O. `Transport` is the seam where the host plugs
//! in a real HTTP stack (`UreqTransport`) or a test double. Any failure to get
//! a response out of the transport becomes `FetchError::Network`; status
//! interpretation and body decoding stay with `ApiClient::parse_fetch_content`.

use newsletter_core::{ApiClient, FetchError, HttpRequest, HttpResponse, ProcessedData};

/// Largest response body read before giving up on the response.
pub const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Performs a GET round-trip for a request built by the core.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking HTTP transport backed by `ureq`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // 4xx/5xx come back as data so the core can read the `error` field.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call().map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Build, execute and parse the processed-sample request.
pub fn fetch_content<T>(client: &ApiClient, transport: &T) -> Result<ProcessedData, FetchError>
where
    T: Transport + ?Sized,
{
    let request = client.build_fetch_content();
    tracing::debug!(url = %request.url, "fetching processed sample");

    let response = transport
        .execute(&request)
        .map_err(|e| FetchError::Network(e.to_string()))?;
    tracing::debug!(
        status = response.status,
        bytes = response.body.len(),
        "backend responded"
    );

    client.parse_fetch_content(response)
}
