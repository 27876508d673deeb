pub mod error;
pub mod http;
pub mod prompt;
pub mod types;

pub use self::error::GenError;
pub use self::prompt::{Prompt, PromptBuilder};
pub use self::types::{
    CompletionResult, FinishReason, GenerationConfig, Message, Role, StreamChunk,
};
