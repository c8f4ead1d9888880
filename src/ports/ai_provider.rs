//! AI provider port - interface for LLM completion integrations.
//!
//! Abstracts the external completion API so the message workflow can
//! generate replies without coupling to a specific vendor.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for AI/LLM completion calls.
///
/// Implementations connect to an external service and translate between the
/// provider-specific API and our message format.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generate a single completion for the given conversation context.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError>;
}

/// Request for a completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation messages (history + current user message), oldest first.
    pub messages: Vec<Message>,
    /// System prompt to guide model behavior, sent before the history.
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for response randomness.
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Creates an empty completion request.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Adds a message to the conversation.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message::new(role, content));
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

impl Default for CompletionRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// A message in the completion context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message.
    pub role: MessageRole,
    /// Message content.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Role of the message sender, as the completion API understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions.
    System,
    /// User input.
    User,
    /// Assistant (model) response.
    Assistant,
}

/// Response from a completion call.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated reply text.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
}

/// Errors from the completion API.
#[derive(Debug, Clone, Error)]
pub enum AiError {
    /// API key was rejected.
    #[error("AI provider authentication failed")]
    AuthenticationFailed,

    /// Provider rate limit reached.
    #[error("AI provider rate limited")]
    RateLimited,

    /// The provider rejected the request.
    #[error("Invalid completion request: {0}")]
    InvalidRequest(String),

    /// Network-level failure reaching the provider.
    #[error("AI provider network error: {0}")]
    Network(String),

    /// Response body could not be parsed.
    #[error("Failed to parse AI provider response: {0}")]
    Parse(String),

    /// Provider returned a server error.
    #[error("AI provider unavailable: {0}")]
    Unavailable(String),

    /// Request timed out.
    #[error("AI provider request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl AiError {
    /// Creates a network error with a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error with a message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an unavailable error with a message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_builder_collects_messages() {
        let request = CompletionRequest::new()
            .with_system_prompt("Be helpful")
            .with_message(MessageRole::User, "Hello")
            .with_message(MessageRole::Assistant, "Hi!")
            .with_max_tokens(500)
            .with_temperature(0.7);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.system_prompt.as_deref(), Some("Be helpful"));
        assert_eq!(request.max_tokens, Some(500));
        assert_eq!(request.temperature, Some(0.7));
    }

    #[test]
    fn message_role_serializes_lowercase() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn ai_provider_trait_is_object_safe() {
        fn _assert_trait_object(_: &dyn AiProvider) {}
    }
}
