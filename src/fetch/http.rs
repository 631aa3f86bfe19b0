// src/fetch/http.rs
// =============================================================================
// This module is the transport layer: it turns a URL plus a header set into a
// status code and a body.
//
// Key functionality:
// - A `Transport` trait so the crawl loop never talks to reqwest directly
// - `HttpTransport`, the real implementation backed by a reqwest Client
// - `FetchError`, the single error type every per-page failure collapses into
//
// There are no retries and no redirect handling beyond what reqwest does by
// default. One request is in flight at a time.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Why a page could not be turned into a record.
///
/// The crawl loop reacts to every variant the same way (log, skip, move on),
/// the variants only exist to make the log line readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or an unreadable body
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),
    /// The URL could not be parsed at all
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Headers sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestHeaders {
    pub user_agent: String,
    pub accept: String,
}

impl Default for RequestHeaders {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                .to_string(),
        }
    }
}

/// What the transport hands back for a request that got an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
    pub content_type: Option<String>,
}

impl FetchResponse {
    /// True for 2xx status codes
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can perform a GET.
///
/// A response with a non-2xx status is still `Ok` here; deciding that a 500
/// means "no record" is the extractor's job.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str, headers: &RequestHeaders) -> Result<FetchResponse, FetchError>;
}

/// The real transport, a thin wrapper around a reqwest Client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the client with reqwest's defaults (no extra timeout).
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, headers: &RequestHeaders) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, headers.user_agent.as_str())
            .header(ACCEPT, headers.accept.as_str())
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().await.map_err(categorize_error)?;

        Ok(FetchResponse {
            status,
            body,
            content_type,
        })
    }
}

// Turns a reqwest error into a short, human-readable transport error.
// The distinctions only affect the log message.
fn categorize_error(error: reqwest::Error) -> FetchError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else if error.is_builder() {
        return FetchError::InvalidUrl(error.to_string());
    } else {
        error.to_string()
    };

    FetchError::Transport(message)
}
