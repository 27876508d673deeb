//! Wire-format types for the completion endpoint.
//!
//! The request envelope names the model URI, the completion options, and
//! the ordered messages array. Responses wrap one or more alternatives;
//! the client always uses the first. Streaming responses deliver the same
//! alternative shape as `data:`-prefixed events.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::GenError;
use crate::core::types::{CompletionResult, FinishReason, Message, StreamChunk};

const STATUS_FINAL: &str = "ALTERNATIVE_STATUS_FINAL";
const STATUS_TRUNCATED: &str = "ALTERNATIVE_STATUS_TRUNCATED_FINAL";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompletionRequest<'a> {
    pub model_uri: &'a str,
    pub completion_options: CompletionOptions,
    pub messages: &'a [Message],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompletionOptions {
    pub stream: bool,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    result: ResultBody,
}

#[derive(Debug, Deserialize)]
struct ResultBody {
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    message: AlternativeMessage,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AlternativeMessage {
    text: String,
}

/// Parse a non-streaming response body into a [`CompletionResult`].
///
/// The original payload is carried along in `raw`; missing expected fields
/// are a [`GenError::ResponseParse`].
pub(crate) fn parse_completion(raw: Value) -> Result<CompletionResult, GenError> {
    let response: CompletionResponse = serde_json::from_value(raw.clone())
        .map_err(|e| GenError::ResponseParse(format!("unexpected completion payload: {e}")))?;

    let alternative = first_alternative(response)?;

    Ok(CompletionResult {
        text: alternative.message.text,
        finish_reason: finish_reason(alternative.status.as_deref()),
        raw,
    })
}

/// Parse one `data:` event payload from a streaming response.
pub(crate) fn parse_stream_event(data: &str) -> Result<StreamChunk, GenError> {
    let response: CompletionResponse = serde_json::from_str(data)
        .map_err(|e| GenError::ResponseParse(format!("unexpected stream event: {e}")))?;

    let alternative = first_alternative(response)?;
    let is_final = matches!(
        alternative.status.as_deref(),
        Some(STATUS_FINAL) | Some(STATUS_TRUNCATED)
    );

    Ok(StreamChunk {
        delta_text: alternative.message.text,
        is_final,
    })
}

fn first_alternative(response: CompletionResponse) -> Result<Alternative, GenError> {
    response
        .result
        .alternatives
        .into_iter()
        .next()
        .ok_or_else(|| GenError::ResponseParse("completion payload has no alternatives".to_string()))
}

fn finish_reason(status: Option<&str>) -> FinishReason {
    match status {
        Some(STATUS_FINAL) => FinishReason::Stop,
        Some(STATUS_TRUNCATED) => FinishReason::Length,
        _ => FinishReason::Other,
    }
}
