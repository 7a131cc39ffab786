//! HTTP DTOs for the summarize endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::conversation::ChatMessage;
use crate::domain::summary::SummaryInput;

use super::super::chat::readable_messages;

/// Body of `POST /api/summarize`. `conversation` wins when both are sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub conversation: Option<Vec<ChatMessage>>,
    #[serde(default)]
    pub concerns: Option<Vec<String>>,
}

impl SummarizeRequest {
    /// Picks the input shape. `None` when neither list was sent.
    pub fn into_input(self) -> Option<SummaryInput> {
        match (self.conversation, self.concerns) {
            (Some(messages), _) => Some(SummaryInput::conversation(messages)),
            (None, Some(concerns)) => Some(SummaryInput::concerns(concerns)),
            (None, None) => None,
        }
    }

    /// Reads a raw body, salvaging whichever list is readable when the strict
    /// parse fails.
    pub fn from_body(body: &[u8]) -> Option<SummaryInput> {
        match serde_json::from_slice::<SummarizeRequest>(body) {
            Ok(request) => request.into_input(),
            Err(err) => {
                tracing::warn!(error = %err, "Malformed summarize body, attempting recovery");
                let value = serde_json::from_slice::<Value>(body).ok()?;
                Self::recover(&value).into_input()
            }
        }
    }

    /// Keeps the well-formed entries of each list and drops the rest.
    fn recover(value: &Value) -> Self {
        let conversation = value
            .get("conversation")
            .and_then(Value::as_array)
            .map(|items| readable_messages(items));
        let concerns = value.get("concerns").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        });
        Self {
            conversation,
            concerns,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}
