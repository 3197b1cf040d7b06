use std::time::Duration;

use mock_server::{Backend, Sample};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_SAMPLE: &str =
    "Weekly Digest\n\nWelcome to this week's newsletter.\nNothing else happened.";

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let sample = std::env::var("SAMPLE_FILE")
        .map(|path| Sample::File(path.into()))
        .unwrap_or_else(|_| Sample::Text(DEFAULT_SAMPLE.to_string()));
    let delay = std::env::var("MOCK_RESPONSE_DELAY")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::ZERO);

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, ?sample, delay_ms = delay.as_millis() as u64, "mock backend listening");
    mock_server::run(listener, Backend::new(sample).with_delay(delay)).await
}
