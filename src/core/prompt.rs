use super::error::GenError;
use super::types::{Message, Role};

/// Ordered, role-tagged message sequence for one completion request.
///
/// At most one system message, always first; the remaining messages keep
/// their insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Prompt {
    messages: Vec<Message>,
}

impl Prompt {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// Accumulates a system prompt and conversation turns into a [`Prompt`].
///
/// ```
/// use ygpt::PromptBuilder;
///
/// # fn main() -> Result<(), ygpt::GenError> {
/// let prompt = PromptBuilder::new()
///     .set_system_prompt("You answer briefly.")
///     .add_user_message("Explain how AI works")?
///     .build();
/// assert_eq!(prompt.messages().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    system: Option<String>,
    messages: Vec<Message>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the system message. `build` always emits it first,
    /// regardless of when it was set.
    pub fn set_system_prompt(mut self, text: impl Into<String>) -> Self {
        self.system = Some(text.into());
        self
    }

    /// Append a user message. Empty or whitespace-only text is rejected.
    pub fn add_user_message(mut self, text: impl Into<String>) -> Result<Self, GenError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(GenError::Validation(
                "user message must not be empty".to_string(),
            ));
        }
        self.messages.push(Message {
            role: Role::User,
            text,
        });
        Ok(self)
    }

    /// Append an assistant message, for carrying earlier turns of a
    /// conversation into the prompt.
    pub fn add_assistant_message(mut self, text: impl Into<String>) -> Self {
        self.messages.push(Message {
            role: Role::Assistant,
            text: text.into(),
        });
        self
    }

    /// Assemble the prompt: the system message (if set) followed by all
    /// added messages in call order. Pure function of accumulated state.
    pub fn build(&self) -> Prompt {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        if let Some(system) = &self.system {
            messages.push(Message {
                role: Role::System,
                text: system.clone(),
            });
        }
        messages.extend(self.messages.iter().cloned());
        Prompt { messages }
    }
}
