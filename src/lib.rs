//! # ygpt
//!
//! Typed async client for the YandexGPT foundation-models completion API.
//!
//! The crate centers on [`GenerationClient`]: build a [`Prompt`] with
//! [`PromptBuilder`], then request a full completion with
//! [`GenerationClient::generate`] or incremental chunks with
//! [`GenerationClient::generate_stream`]. Failures come back as one
//! [`GenError`] per call, split by whether a retry makes sense; the client
//! itself never retries. [`ReplyService`] wraps the client in the
//! `{success, reply | error}` shape an HTTP route layer consumes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ygpt::{Credentials, GenerationClient, GenerationConfig, PromptBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GenerationClient::new(Credentials::from_env()?)?;
//!
//!     let prompt = PromptBuilder::new()
//!         .set_system_prompt("You answer briefly.")
//!         .add_user_message("Explain how AI works")?
//!         .build();
//!
//!     let result = client.generate(&prompt, GenerationConfig::default()).await?;
//!     println!("{}", result.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use ygpt::{Credentials, GenerationClient, GenerationConfig, PromptBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GenerationClient::new(Credentials::from_env()?)?;
//! let prompt = PromptBuilder::new().add_user_message("Tell me a story")?.build();
//!
//! let mut stream = client.generate_stream(&prompt, GenerationConfig::default()).await?;
//! while let Some(chunk) = stream.next().await {
//!     print!("{}", chunk?.delta_text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod completions;
pub mod core;
pub mod provider;
pub mod service;

pub use crate::completions::{CompletionStream, GenerationClient};
pub use crate::core::error::GenError;
pub use crate::core::http::HttpClientConfig;
pub use crate::core::prompt::{Prompt, PromptBuilder};
pub use crate::core::types::{
    CompletionResult, FinishReason, GenerationConfig, Message, Role, StreamChunk,
};
pub use crate::provider::Credentials;
pub use crate::service::{ReplyRequest, ReplyResponse, ReplyService};
