//! HTTP DTOs for the chat endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::conversation::{ChatMessage, TurnReply};

/// Exchange assumed when the body does not carry a usable count.
pub const DEFAULT_EXCHANGE: i64 = 1;

fn default_exchange() -> i64 {
    DEFAULT_EXCHANGE
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub survey_data: SurveyDataDto,
    /// 1-indexed exchange being requested.
    #[serde(default = "default_exchange")]
    pub exchange_count: i64,
}

impl ChatRequest {
    /// Reads a raw body. When the strict parse fails the exchange count is
    /// still honoured and only well-formed messages are kept.
    ///
    /// `None` only when the body is not JSON at all.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<ChatRequest>(body) {
            Ok(request) => Some(request),
            Err(err) => {
                tracing::warn!(error = %err, "Malformed chat body, attempting recovery");
                let value = serde_json::from_slice::<Value>(body).ok()?;
                Some(Self::recover(&value))
            }
        }
    }

    fn recover(value: &Value) -> Self {
        let exchange_count = value
            .get("exchangeCount")
            .and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)))
            .unwrap_or(DEFAULT_EXCHANGE);
        let messages = value
            .get("messages")
            .and_then(Value::as_array)
            .map(|items| readable_messages(items))
            .unwrap_or_default();
        let rating = |key: &str| {
            value
                .get("surveyData")
                .and_then(|data| data.get(key))
                .and_then(Value::as_u64)
                .and_then(|n| u8::try_from(n).ok())
                .unwrap_or_default()
        };

        Self {
            messages,
            survey_data: SurveyDataDto {
                personal_rating: rating("personalRating"),
                team_rating: rating("teamRating"),
            },
            exchange_count,
        }
    }
}

/// Entries that parse as chat messages; others are dropped.
pub(crate) fn readable_messages(items: &[Value]) -> Vec<ChatMessage> {
    items
        .iter()
        .filter_map(|item| ChatMessage::deserialize(item).ok())
        .collect()
}

/// Ratings as the client holds them. Other survey fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDataDto {
    #[serde(default)]
    pub personal_rating: u8,
    #[serde(default)]
    pub team_rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub is_complete: bool,
}

impl From<TurnReply> for ChatResponse {
    fn from(reply: TurnReply) -> Self {
        Self {
            message: reply.message,
            is_complete: reply.is_complete,
        }
    }
}
