//! Error taxonomy for fetching processed content.
//!
//! # Design
//! Three kinds, distinguished only by where the failure happened: before any
//! response (`Network`), a response with a failure status (`Http`), or a
//! success response whose body is unusable (`Parse`). The view collapses all
//! three into one error state; `message` is what it shows.

/// Shown when a failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "Failed to fetch data from backend.";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No response was received: connection refused, DNS failure, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status. `message` is the body's
    /// `error` field when one was sent.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Http { status: u16, message: Option<String> },

    /// A 2xx body that is not JSON or not shaped like `ProcessedData`.
    #[error("unexpected response body: {0}")]
    Parse(String),
}

impl FetchError {
    /// The user-facing message this error carries, if any.
    ///
    /// Network failures carry none so the caller's generic fallback is shown.
    pub fn message(&self) -> Option<String> {
        match self {
            FetchError::Network(_) => None,
            FetchError::Http { status, message } => Some(
                message
                    .clone()
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| format!("HTTP error! Status: {status}")),
            ),
            FetchError::Parse(detail) => {
                Some(format!("Unexpected response from backend: {detail}"))
            }
        }
    }

    /// `message`, or `FALLBACK_MESSAGE` when there is none.
    pub fn display_message(&self) -> String {
        self.message().unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
    }
}
