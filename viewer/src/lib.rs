//! Host side of the newsletter viewer.
//!
//! # Overview
//! Executes the core's requests over real HTTP, owns the per-mount view
//! lifecycle, and wires configuration and logging for the binary.
//!
//! # Design
//! - `Transport` is the only place network I/O happens; `UreqTransport` is
//!   the production implementation.
//! - `ViewController` runs one fetch per mount on the tokio runtime and
//!   renders purely from its `ViewState`.

pub mod config;
pub mod controller;
pub mod logging;
pub mod transport;

pub use config::{ConfigError, ViewerConfig};
pub use controller::ViewController;
pub use transport::{fetch_content, Transport, TransportError, UreqTransport};
