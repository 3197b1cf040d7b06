//! Payload DTO for the `/api/process-sample` endpoint.
//!
//! # Design
//! Every field is optional: the backend returns `plain_text` on success and
//! `error` on failure, and the HTTP status decides which one is consulted.
//! The type mirrors the mock-server's responses but is defined independently;
//! integration tests catch schema drift.
//!
//! Only `plain_text` must have the right type. The advisory fields are read
//! leniently: a value of the wrong type is dropped instead of failing the
//! whole payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// The JSON body returned by the backend, on success or failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessedData {
    /// Extracted text. Absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub plain_text_length: Option<u64>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,

    /// Human-readable failure reason, sent alongside a non-2xx status.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,

    /// Advisory detail attached to some failures. Never shown instead of `error`.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub details: Option<String>,
}

impl ProcessedData {
    /// The extracted text, treating an empty string as no content.
    pub fn text(&self) -> Option<&str> {
        self.plain_text.as_deref().filter(|text| !text.is_empty())
    }
}

/// Accept any JSON value; keep it only if it converts to `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
