//! Mount-scoped owner of the view state.
//!
//! # Design
//! `mount` schedules exactly one fetch on the tokio runtime and keeps its
//! handle. `settle` awaits that handle once and resolves the `ViewState`;
//! rendering only reads the state and never triggers another fetch.
//! Dropping the controller detaches an outstanding fetch: the request runs to
//! completion and its result is discarded.

use newsletter_core::{ApiClient, FetchError, Page, ProcessedData, ViewState};
use tokio::task::JoinHandle;

use crate::transport::{fetch_content, Transport};

type FetchOutcome = Result<ProcessedData, FetchError>;

#[derive(Debug)]
pub struct ViewController {
    state: ViewState,
    pending: Option<JoinHandle<FetchOutcome>>,
}

impl ViewController {
    /// Start the lifecycle in `Loading` and schedule the single fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<T>(client: ApiClient, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        tracing::debug!(base_url = client.base_url(), "mounting view");
        let pending = tokio::task::spawn_blocking(move || fetch_content(&client, &transport));
        Self {
            state: ViewState::Loading,
            pending: Some(pending),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn render(&self) -> Page {
        self.state.render()
    }

    /// Wait for the fetch and apply its outcome.
    ///
    /// Once resolved, further calls return the terminal state immediately.
    /// Cancel-safe: the handle is only released after it completes.
    pub async fn settle(&mut self) -> &ViewState {
        if let Some(pending) = self.pending.as_mut() {
            let outcome = pending
                .await
                .unwrap_or_else(|e| Err(FetchError::Network(format!("fetch task failed: {e}"))));
            self.pending = None;

            if let Err(err) = &outcome {
                tracing::warn!(error = %err, "failed to load content");
            }
            if self.state.resolve(outcome) {
                tracing::debug!(state = ?self.state, "view resolved");
            }
        }
        &self.state
    }

    /// Tear the view down. An in-flight fetch is left to finish unobserved.
    pub fn unmount(self) {
        if self.pending.is_some() {
            tracing::debug!("unmounted with fetch in flight, result will be discarded");
        }
    }
}
