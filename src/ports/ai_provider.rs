//! AI Provider Port - Interface for the chat-completion gateway.
//!
//! The interview and the summarizer ask this port for one text completion
//! per call. Implementations translate to a provider wire format (OpenAI
//! chat completions in production, a scripted mock in tests).
//!
//! # Example
//!
//! ```ignore
//! let request = CompletionRequest::new(RequestMetadata::new(session_id, "trace-1"))
//!     .with_system_prompt(interviewer_system_prompt(4, 2, 1))
//!     .with_message(MessageRole::User, "Slack feels heavy")
//!     .with_max_tokens(500)
//!     .with_temperature(0.7);
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::conversation::{ChatMessage, ChatRole};
use crate::domain::foundation::SurveySessionId;

/// Port for chat-completion providers.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for AI completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation messages, oldest first.
    pub messages: Vec<Message>,
    /// System prompt sent ahead of the messages.
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for response randomness.
    pub temperature: Option<f32>,
    /// Request metadata for tracing.
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    pub fn new(metadata: RequestMetadata) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            max_tokens: None,
            temperature: None,
            metadata,
        }
    }

    /// Adds a message to the conversation.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message::new(role, content));
        self
    }

    /// Appends interview messages in order.
    pub fn with_history<'a>(mut self, history: impl IntoIterator<Item = &'a ChatMessage>) -> Self {
        self.messages.extend(history.into_iter().map(Message::from));
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// A message in the provider's format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

impl From<&ChatMessage> for Message {
    fn from(message: &ChatMessage) -> Self {
        let role = match message.role {
            ChatRole::User => MessageRole::User,
            ChatRole::Assistant => MessageRole::Assistant,
        };
        Self::new(role, message.content.clone())
    }
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Request metadata for tracing.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// Survey session the call belongs to.
    pub session_id: SurveySessionId,
    /// Trace ID for correlating logs.
    pub trace_id: String,
}

impl RequestMetadata {
    pub fn new(session_id: SurveySessionId, trace_id: impl Into<String>) -> Self {
        Self {
            session_id,
            trace_id: trace_id.into(),
        }
    }

    /// Metadata for a one-off call with a generated session and trace ID.
    pub fn detached() -> Self {
        let session_id = SurveySessionId::new();
        let trace_id = session_id.to_string();
        Self {
            session_id,
            trace_id,
        }
    }
}

/// Response from AI completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Generated content. May be empty.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "openai", "mock").
    pub name: String,
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// AI provider errors.
///
/// Callers never surface these to respondents; every variant degrades to
/// canned text.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    #[error("rate limited")]
    RateLimited,

    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl AIError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AIError::RateLimited => "rate_limited",
            AIError::Unavailable { .. } => "unavailable",
            AIError::AuthenticationFailed => "authentication_failed",
            AIError::Network(_) => "network",
            AIError::Parse(_) => "parse",
            AIError::InvalidRequest(_) => "invalid_request",
            AIError::Timeout { .. } => "timeout",
        }
    }
}
