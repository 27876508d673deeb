//! Consumer-facing reply contract.
//!
//! The route layer hands one inbound message over and gets a structured
//! outcome back. Every failure becomes `{success: false, error}`; nothing
//! in this module panics on a bad request or a provider error.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::completions::GenerationClient;
use crate::core::error::GenError;
use crate::core::prompt::PromptBuilder;
use crate::core::types::GenerationConfig;

/// One inbound message to answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyRequest {
    pub text: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

/// Structured outcome handed back to the route layer.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReplyResponse {
    fn ok(reply: String) -> Self {
        Self {
            success: true,
            reply: Some(reply),
            error: None,
        }
    }

    fn failed(error: &GenError) -> Self {
        Self {
            success: false,
            reply: None,
            error: Some(error.to_string()),
        }
    }
}

/// Owns the [`GenerationClient`] and exposes the one-shot reply operation
/// the request-handling layer consumes.
pub struct ReplyService {
    client: GenerationClient,
}

impl ReplyService {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Generate a reply for one inbound message.
    pub async fn reply(&self, request: ReplyRequest) -> ReplyResponse {
        match self.generate(request).await {
            Ok(reply) => ReplyResponse::ok(reply),
            Err(error) => {
                warn!(error = %error, retryable = error.is_retryable(), "reply generation failed");
                ReplyResponse::failed(&error)
            }
        }
    }

    async fn generate(&self, request: ReplyRequest) -> Result<String, GenError> {
        let mut builder = PromptBuilder::new();
        if let Some(system) = request.system_prompt {
            builder = builder.set_system_prompt(system);
        }
        let prompt = builder.add_user_message(request.text)?.build();

        let overrides = GenerationConfig {
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let result = self.client.generate(&prompt, overrides).await?;
        Ok(result.text)
    }
}
