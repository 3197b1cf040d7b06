//! I/O-free core of the newsletter viewer.
//!
//! # Overview
//! Builds the `HttpRequest` for the processed sample and parses the
//! `HttpResponse` without touching the network (host-does-IO pattern), then
//! turns the outcome into a `ViewState` and a renderable `Page`.
//!
//! # Design
//! - `ApiClient` is stateless; it holds only `base_url`.
//! - Fetching is split into `build_fetch_content` and `parse_fetch_content`,
//!   so the I/O boundary is explicit.
//! - `ViewState` is a tagged variant that resolves exactly once.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::{ApiClient, DEFAULT_BASE_URL, PROCESS_SAMPLE_PATH};
pub use error::{FetchError, FALLBACK_MESSAGE};
pub use http::{HttpRequest, HttpResponse};
pub use types::ProcessedData;
pub use view::{Page, Region, ViewState};
