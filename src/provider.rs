//! Provider-facing pieces: credentials and the wire format of the
//! foundation-models completion endpoint.

mod constants;
pub(crate) mod wire;

use crate::core::error::GenError;

pub(crate) use constants::COMPLETION_URL;

/// Construction-time configuration for the completion endpoint: the API
/// key, the billing folder identifier, and an optional model override.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub folder_id: String,
    /// Model name or full `gpt://` URI. Defaults to `yandexgpt/latest`.
    pub model_uri: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            folder_id: folder_id.into(),
            model_uri: None,
        }
    }

    pub fn with_model_uri(mut self, model_uri: impl Into<String>) -> Self {
        self.model_uri = Some(model_uri.into());
        self
    }

    /// Read credentials from `YANDEX_API_KEY`, `YANDEX_FOLDER_ID`, and the
    /// optional `YANDEX_MODEL_URI`.
    pub fn from_env() -> Result<Self, GenError> {
        let api_key = require_env(constants::API_KEY_ENV_VAR)?;
        let folder_id = require_env(constants::FOLDER_ID_ENV_VAR)?;
        let model_uri = std::env::var(constants::MODEL_URI_ENV_VAR).ok();
        Ok(Self {
            api_key,
            folder_id,
            model_uri,
        })
    }

    /// Missing credentials are a construction-time failure, never a
    /// per-request one.
    pub(crate) fn validate(&self) -> Result<(), GenError> {
        if self.api_key.trim().is_empty() {
            return Err(GenError::Configuration(format!(
                "API key is not set (pass it explicitly or set {})",
                constants::API_KEY_ENV_VAR
            )));
        }
        if self.folder_id.trim().is_empty() {
            return Err(GenError::Configuration(format!(
                "folder id is not set (pass it explicitly or set {})",
                constants::FOLDER_ID_ENV_VAR
            )));
        }
        Ok(())
    }

    /// Expand the configured model into a full URI. A value that already
    /// carries the `gpt://` scheme is used verbatim, otherwise it is scoped
    /// to the folder: `gpt://{folder_id}/{name}`.
    pub(crate) fn resolved_model_uri(&self) -> String {
        let name = self.model_uri.as_deref().unwrap_or(constants::DEFAULT_MODEL);
        if name.starts_with("gpt://") {
            name.to_string()
        } else {
            format!("gpt://{}/{}", self.folder_id, name)
        }
    }
}

fn require_env(name: &str) -> Result<String, GenError> {
    std::env::var(name).map_err(|_| GenError::Configuration(format!("{name} is not set")))
}
