use thiserror::Error;

/// Error taxonomy for a single completion call.
///
/// The client performs no retries of its own. Variants that a caller may
/// reasonably retry report it through [`GenError::is_retryable`]; everything
/// else is terminal for the inputs that produced it.
#[derive(Error, Debug)]
pub enum GenError {
    /// Missing or unusable credentials, detected at construction time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Bad caller input, rejected before any network call is made.
    #[error("validation error: {0}")]
    Validation(String),

    /// The provider rejected the credentials (HTTP 401/403).
    #[error("authentication error: {0}")]
    Authentication(String),

    /// The provider is throttling (HTTP 429).
    #[error("rate limited: {0}")]
    RateLimit(String),

    /// Network failure, timeout, or a provider 5xx.
    #[error("transient error: {0}")]
    Transient(String),

    /// The provider rejected a request that passed local validation (other 4xx).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The provider returned a payload shape the client cannot interpret.
    #[error("response parse error: {0}")]
    ResponseParse(String),
}

impl GenError {
    /// Whether the caller may retry the failed call as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenError::RateLimit(_) | GenError::Transient(_))
    }
}
