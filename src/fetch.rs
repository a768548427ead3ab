//! Blocking CSV download for the `remote-data` feature.
//!
//! One-shot fetch with a bounded timeout; every failure maps to
//! [`SplashError::Fetch`] so callers can degrade to an absent chart.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{SplashError, SplashResult};

/// Default timeout for the dataset request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(12);

/// CSV text fetched from a URL together with when it arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedCsv {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub body: String,
}

/// Fetches CSV text from `url` with the default timeout.
pub fn fetch_csv_text(url: &str) -> SplashResult<FetchedCsv> {
    fetch_csv_text_with_timeout(url, DEFAULT_FETCH_TIMEOUT)
}

/// Fetches CSV text from `url`, failing after `timeout`.
pub fn fetch_csv_text_with_timeout(url: &str, timeout: Duration) -> SplashResult<FetchedCsv> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SplashError::Fetch(format!("failed to build http client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| SplashError::Fetch(format!("request to `{url}` failed: {e}")))?
        .error_for_status()
        .map_err(|e| SplashError::Fetch(format!("request to `{url}` failed: {e}")))?;

    let body = response
        .text()
        .map_err(|e| SplashError::Fetch(format!("failed to read body from `{url}`: {e}")))?;

    debug!(url, bytes = body.len(), "csv dataset fetched");
    Ok(FetchedCsv {
        url: url.to_owned(),
        fetched_at: Utc::now(),
        body,
    })
}
