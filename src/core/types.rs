use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::GenError;

/// Role tag on a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message in a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

/// Per-call generation parameter overrides.
///
/// Absent fields fall back to the client's defaults during the merge; the
/// merged values are validated before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenerationConfig {
    /// Sampling temperature, valid range 0.0 to 1.0.
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate, must be at least 1.
    pub max_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Merge these overrides over concrete defaults. Per-call values win.
    pub(crate) fn merge_over(self, defaults: ResolvedConfig) -> ResolvedConfig {
        ResolvedConfig {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
        }
    }
}

/// Fully resolved generation parameters for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ResolvedConfig {
    pub(crate) const DEFAULT_TEMPERATURE: f32 = 0.6;
    pub(crate) const DEFAULT_MAX_TOKENS: u32 = 2000;

    pub(crate) fn validate(&self) -> Result<(), GenError> {
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(GenError::Validation(format!(
                "temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(GenError::Validation(
                "max_tokens must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            temperature: Self::DEFAULT_TEMPERATURE,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
        }
    }
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Natural end of the completion.
    Stop,
    /// The token limit was reached before a natural end.
    Length,
    /// Any other provider-reported status.
    Other,
}

/// The full result of one non-streaming completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResult {
    /// Generated text of the first alternative.
    pub text: String,
    pub finish_reason: FinishReason,
    /// The provider payload as received, for callers that need fields the
    /// client does not model.
    pub raw: Value,
}

/// One incremental unit of a streaming completion.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamChunk {
    pub delta_text: String,
    /// Set on the last chunk of the sequence.
    pub is_final: bool,
}
