//! LINE Notify delivery.
//!
//! [`LineNotifyDelivery`] posts a form-encoded `message` field with a bearer
//! token to the LINE Notify endpoint. There is no retry: callers dispatch it
//! through [`roomgate_core::notify::dispatch`], which bounds the attempt with
//! a timeout and logs any failure.

use std::time::Duration;

use async_trait::async_trait;
use roomgate_core::notify::{Notifier, NotifyError};

/// Public LINE Notify endpoint.
pub const DEFAULT_LINE_NOTIFY_URL: &str = "https://notify-api.line.me/api/notify";

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for LINE Notify delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum LineNotifyError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// LINE returned a non-2xx status code (401 means a bad token).
    #[error("LINE Notify returned HTTP {0}")]
    HttpStatus(u16),
}

impl From<LineNotifyError> for NotifyError {
    fn from(err: LineNotifyError) -> Self {
        match err {
            LineNotifyError::Request(e) => NotifyError::Transport(e.to_string()),
            LineNotifyError::HttpStatus(code) => NotifyError::HttpStatus(code),
        }
    }
}

// ---------------------------------------------------------------------------
// LineNotifyConfig
// ---------------------------------------------------------------------------

/// Configuration for LINE Notify delivery.
#[derive(Clone)]
pub struct LineNotifyConfig {
    /// Personal access token issued by LINE Notify.
    pub token: String,
    /// Endpoint URL (overridable for staging and tests).
    pub url: String,
}

impl std::fmt::Debug for LineNotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineNotifyConfig")
            .field("token", &"<redacted>")
            .field("url", &self.url)
            .finish()
    }
}

impl LineNotifyConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `LINE_NOTIFY_TOKEN` is not set, signalling that
    /// alerts should only be logged.
    ///
    /// | Variable            | Required | Default                                  |
    /// |---------------------|----------|------------------------------------------|
    /// | `LINE_NOTIFY_TOKEN` | yes      | none                                     |
    /// | `LINE_NOTIFY_URL`   | no       | `https://notify-api.line.me/api/notify`  |
    pub fn from_env() -> Option<Self> {
        let token = std::env::var("LINE_NOTIFY_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())?;
        Some(Self {
            token,
            url: std::env::var("LINE_NOTIFY_URL")
                .unwrap_or_else(|_| DEFAULT_LINE_NOTIFY_URL.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// LineNotifyDelivery
// ---------------------------------------------------------------------------

/// Sends alert text to a LINE Notify channel.
pub struct LineNotifyDelivery {
    client: reqwest::Client,
    config: LineNotifyConfig,
}

impl LineNotifyDelivery {
    /// Create a delivery service with a pre-configured HTTP client.
    pub fn new(config: LineNotifyConfig) -> Result<Self, LineNotifyError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    /// Execute a single POST and check the response status.
    pub async fn deliver(&self, message: &str) -> Result<(), LineNotifyError> {
        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.token)
            .form(&[("message", message)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LineNotifyError::HttpStatus(response.status().as_u16()));
        }

        tracing::debug!(url = %self.config.url, "LINE Notify accepted message");
        Ok(())
    }
}

#[async_trait]
impl Notifier for LineNotifyDelivery {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        self.deliver(message).await.map_err(NotifyError::from)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
