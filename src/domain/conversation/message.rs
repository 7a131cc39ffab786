//! Chat messages and the transcript they form.
//!
//! Messages are plain role/content pairs so they travel unchanged between the
//! survey page, the chat endpoint and the summarizer.

use serde::{Deserialize, Serialize};

/// Role of a message sender in the concerns interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Respondent input.
    User,
    /// Interviewer reply, live or canned.
    Assistant,
}

impl ChatRole {
    /// Speaker label used when the transcript is flattened to text.
    pub fn transcript_label(&self) -> &'static str {
        match self {
            ChatRole::User => "User",
            ChatRole::Assistant => "AI",
        }
    }
}

/// One message in the interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Creates a new message.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Ordered, append-only record of an interview.
///
/// The first entry is the synthesized greeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Starts a transcript with the interviewer's greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
        }
    }

    /// Wraps messages received from a caller as-is.
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages the respondent has sent.
    pub fn user_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_user()).count()
    }

    /// The last `n` messages, oldest first.
    pub fn recent(&self, n: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    /// Messages after a leading assistant greeting.
    ///
    /// A transcript that does not start with an assistant message is
    /// returned whole: callers may already have dropped the greeting.
    pub fn without_greeting(&self) -> &[ChatMessage] {
        match self.messages.first() {
            Some(first) if first.role == ChatRole::Assistant => &self.messages[1..],
            _ => &self.messages,
        }
    }

    /// Flattens the transcript to `User: ...` / `AI: ...` blocks separated by
    /// a blank line. This is the text submitted with the survey.
    pub fn to_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.role.transcript_label(), m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
