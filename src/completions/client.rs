//! The generation client: synchronous and streaming completion requests.

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::error::GenError;
use crate::core::http::{self, HttpClientConfig};
use crate::core::prompt::Prompt;
use crate::core::types::{CompletionResult, GenerationConfig, ResolvedConfig};
use crate::provider::{self, Credentials, wire};

use super::stream::CompletionStream;

/// Client for the remote completion endpoint.
///
/// Owns the endpoint URL, the credentials, and the default generation
/// parameters. All fields are read-only after construction, so one instance
/// serves any number of concurrent calls; each call opens its own request
/// and carries its own lifecycle. The client never retries — callers decide
/// what to do with errors where [`GenError::is_retryable`] is true.
#[derive(Debug)]
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    folder_id: String,
    model_uri: String,
    defaults: ResolvedConfig,
}

impl GenerationClient {
    /// Create a client with default timeouts.
    ///
    /// Fails with [`GenError::Configuration`] when the API key or folder id
    /// is missing; this is the only validation done before the first call.
    pub fn new(credentials: Credentials) -> Result<Self, GenError> {
        Self::with_http_config(credentials, HttpClientConfig::default())
    }

    /// Create a client with explicit timeout configuration.
    pub fn with_http_config(
        credentials: Credentials,
        config: HttpClientConfig,
    ) -> Result<Self, GenError> {
        credentials.validate()?;
        let http = http::build_client(&config)?;

        Ok(Self {
            http,
            base_url: provider::COMPLETION_URL.to_string(),
            model_uri: credentials.resolved_model_uri(),
            api_key: credentials.api_key,
            folder_id: credentials.folder_id,
            defaults: ResolvedConfig::default(),
        })
    }

    /// Replace the endpoint URL. Lets tests point the client at a local
    /// double.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the default generation parameters. Fields left unset keep
    /// the built-in defaults.
    pub fn with_defaults(mut self, defaults: GenerationConfig) -> Self {
        self.defaults = defaults.merge_over(self.defaults);
        self
    }

    /// Request a complete generation in one exchange.
    ///
    /// Merges `overrides` over the client defaults, validates the merged
    /// parameters, and only then touches the network. Returns the first
    /// alternative of the response.
    #[tracing::instrument(name = "generate", skip(self, prompt, overrides), fields(model = %self.model_uri))]
    pub async fn generate(
        &self,
        prompt: &Prompt,
        overrides: GenerationConfig,
    ) -> Result<CompletionResult, GenError> {
        let config = overrides.merge_over(self.defaults);
        config.validate()?;

        let response = self.send(prompt, config, false).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "completion request rejected");
            return Err(http::status_to_error(status, &body));
        }

        let body = response.text().await.map_err(http::transport_error)?;
        let raw: Value = serde_json::from_str(&body)
            .map_err(|e| GenError::ResponseParse(format!("completion body is not JSON: {e}")))?;

        debug!("completion received");
        wire::parse_completion(raw)
    }

    /// Request a streaming generation.
    ///
    /// Steps are identical to [`generate`](Self::generate) except the
    /// request declares streaming mode and the open connection is handed to
    /// a [`CompletionStream`]. Errors that the provider reports up front
    /// (auth, throttling) surface here; anything that happens mid-body
    /// surfaces on the pull that discovers it.
    #[tracing::instrument(name = "generate_stream", skip(self, prompt, overrides), fields(model = %self.model_uri))]
    pub async fn generate_stream(
        &self,
        prompt: &Prompt,
        overrides: GenerationConfig,
    ) -> Result<CompletionStream, GenError> {
        let config = overrides.merge_over(self.defaults);
        config.validate()?;

        let response = self.send(prompt, config, true).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "streaming request rejected");
            return Err(http::status_to_error(status, &body));
        }

        debug!("stream opened");
        Ok(CompletionStream::new(response.bytes_stream()))
    }

    async fn send(
        &self,
        prompt: &Prompt,
        config: ResolvedConfig,
        stream: bool,
    ) -> Result<reqwest::Response, GenError> {
        let body = wire::CompletionRequest {
            model_uri: &self.model_uri,
            completion_options: wire::CompletionOptions {
                stream,
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            },
            messages: prompt.messages(),
        };

        self.http
            .post(&self.base_url)
            .header("Authorization", format!("Api-Key {}", self.api_key))
            .header("x-folder-id", &self.folder_id)
            .json(&body)
            .send()
            .await
            .map_err(http::transport_error)
    }
}
