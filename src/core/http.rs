//! Shared HTTP plumbing: client construction, timeouts, and the mapping
//! from transport and status failures to the error taxonomy.

use std::time::Duration;

use reqwest::StatusCode;

use super::error::GenError;

/// How much of an error body to keep in error messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Timeout configuration for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub connect_timeout: Duration,
    /// Total request timeout. For streaming calls this bounds the whole
    /// body, not individual chunks.
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Build the reqwest client used for every call of one `GenerationClient`.
pub(crate) fn build_client(config: &HttpClientConfig) -> Result<reqwest::Client, GenError> {
    reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout)
        .user_agent(concat!("ygpt/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GenError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Map a non-success status and its error body to a typed error.
pub(crate) fn status_to_error(status: StatusCode, body: &str) -> GenError {
    let detail = if body.trim().is_empty() {
        status.to_string()
    } else {
        format!("{status}: {}", truncate(body))
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenError::Authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => GenError::RateLimit(detail),
        s if s.is_server_error() => GenError::Transient(detail),
        _ => GenError::InvalidRequest(detail),
    }
}

/// Map a transport-level failure. Timeouts, connect errors, and severed
/// connections are all transient from the caller's point of view.
pub(crate) fn transport_error(err: reqwest::Error) -> GenError {
    GenError::Transient(format!("request failed: {err}"))
}

fn truncate(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}
