use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Response body of `/api/process-sample`. Absent fields are omitted.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessedSample {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_text_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessedSample {
    fn text(plain_text: String, message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            plain_text_length: Some(plain_text.chars().count()),
            plain_text: Some(plain_text),
            ..Self::default()
        }
    }

    fn error(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// What `/api/process-sample` answers with.
#[derive(Clone, Debug)]
pub enum Sample {
    /// 200 with the text as `plain_text`.
    Text(String),
    /// 200 with `{}`.
    Empty,
    /// The given status, with `{"error": ..}` or `{}`.
    Failure { status: u16, error: Option<String> },
    /// 200 with a body that is not JSON.
    Malformed,
    /// Serve the file's contents as `plain_text`, read on every request.
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Backend {
    pub sample: Sample,
    pub delay: Duration,
}

impl Backend {
    pub fn new(sample: Sample) -> Self {
        Self {
            sample,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub fn app(backend: Backend) -> Router {
    Router::new()
        .route("/api/process-sample", get(process_sample))
        .with_state(Arc::new(backend))
}

pub async fn run(listener: TcpListener, backend: Backend) -> Result<(), std::io::Error> {
    axum::serve(listener, app(backend)).await
}

async fn process_sample(State(backend): State<Arc<Backend>>) -> axum::response::Response {
    if !backend.delay.is_zero() {
        tokio::time::sleep(backend.delay).await;
    }

    match &backend.sample {
        Sample::Text(text) => {
            Json(ProcessedSample::text(text.clone(), "Processed sample content")).into_response()
        }
        Sample::Empty => Json(ProcessedSample::default()).into_response(),
        Sample::Failure { status, error } => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = error.clone().map(ProcessedSample::error).unwrap_or_default();
            (status, Json(body)).into_response()
        }
        Sample::Malformed => (
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            "this is not json",
        )
            .into_response(),
        Sample::File(path) => from_file(path).await.into_response(),
    }
}

async fn from_file(path: &Path) -> (StatusCode, Json<ProcessedSample>) {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "sample file missing");
            return (
                StatusCode::NOT_FOUND,
                Json(ProcessedSample::error(format!(
                    "Sample file not found at {}. Please create it.",
                    path.display()
                ))),
            );
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to read sample file");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProcessedSample::error(format!("Error reading sample file: {e}"))),
            );
        }
    };

    let text = contents.trim();
    if text.is_empty() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ProcessedSample::error(
                "Failed to extract plain text from sample HTML".to_string(),
            )),
        );
    }

    let mut body = ProcessedSample::text(text.to_string(), "Processed sample content");
    body.source_file = Some(path.display().to_string());
    (StatusCode::OK, Json(body))
}
