// src/trackers/mod.rs
pub mod gitlab;
pub mod jira;
pub mod models;
pub mod render;

use std::time::Duration;

use crate::utils::error::TrackerError;

// Upper bound for a single upstream request.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Creates a reqwest client shared by the tracker clients.
fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!("daily_report/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}

/// Turns a non-2xx response into `TrackerError::Http`, keeping the body for the log.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, TrackerError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!("HTTP error status: {} ({})", status, body);
    Err(TrackerError::Http { status, body })
}
