//! todoview-fetch — the HTTP side of a refresh.
//!
//! A [`Fetcher`] issues one `GET` against the configured todo endpoint with
//! `Accept: application/json`, maps transport and status failures onto
//! [`RefreshError`], and hands the decoded payload to the normalizer.
//!
//! ```text
//! fetch() ──► RawResponse ──► json() ──► normalize()
//! ```

use bytes::Bytes;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::{Duration, Instant};
use todoview_core::{error::RefreshResult, normalize, normalizer::parse_payload, RefreshError, Todo};

/// Status code and body of a successful (`200 OK`) response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    /// Decode the body as UTF-8 JSON text. A leading byte-order mark is ignored.
    pub fn json(&self) -> RefreshResult<Value> {
        let text = std::str::from_utf8(&self.body)
            .map_err(|e| RefreshError::decode(format!("body is not valid UTF-8: {e}")))?;
        parse_payload(text)
    }
}

/// One endpoint, one client, one timeout.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> RefreshResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RefreshError::transport(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue the `GET`. Anything other than `200 OK` is an error.
    pub async fn fetch(&self) -> RefreshResult<RawResponse> {
        let started = Instant::now();
        tracing::debug!(
            url = %self.url,
            timeout_ms = self.timeout.as_millis() as u64,
            "fetch: request started"
        );

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(url = %self.url, status = status.as_u16(), "fetch: unexpected status");
            return Err(RefreshError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| transport_error(&e))?;
        tracing::debug!(
            url = %self.url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetch: response received"
        );

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }

    /// Fetch, decode, and normalise in one step.
    pub async fn fetch_todos(&self) -> RefreshResult<Vec<Todo>> {
        let result = self.fetch_and_normalize().await;
        match &result {
            Ok(todos) => tracing::info!(url = %self.url, count = todos.len(), "refresh succeeded"),
            Err(e) => tracing::warn!(url = %self.url, kind = e.kind(), error = %e, "refresh failed"),
        }
        result
    }

    async fn fetch_and_normalize(&self) -> RefreshResult<Vec<Todo>> {
        let payload = self.fetch().await?.json()?;
        Ok(normalize(&payload)?)
    }
}

fn transport_error(err: &reqwest::Error) -> RefreshError {
    if err.is_timeout() {
        RefreshError::transport("request timed out")
    } else if err.is_connect() {
        RefreshError::transport(format!("could not connect: {}", root_cause(err)))
    } else {
        RefreshError::transport(root_cause(err))
    }
}

/// reqwest's top-level message is generic ("error sending request"); the
/// useful detail lives at the bottom of the source chain.
fn root_cause(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
