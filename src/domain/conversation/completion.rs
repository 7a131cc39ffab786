//! Completion detection for the concerns interview.
//!
//! The interviewer signals it is done by emitting a literal marker anywhere in
//! its reply. The marker is never shown to the respondent.

use serde::{Deserialize, Serialize};

use super::fallback::{degraded_reply, fallback_reply, CLARIFY_REPLY};

/// Literal end-of-interview marker.
pub const COMPLETION_MARKER: &str = "[COMPLETE]";

/// The interview is forced closed after this many exchanges.
pub const MAX_EXCHANGES: u32 = 3;

/// True once `exchange` (1-indexed) has reached the last allowed exchange.
pub fn is_final_exchange(exchange: i64) -> bool {
    exchange >= MAX_EXCHANGES as i64
}

/// Removes every occurrence of the marker and trims what is left.
///
/// Returns the visible text and whether the marker was present. Removal
/// repeats until no marker remains, so fragments that join up into a new
/// marker are removed too.
pub fn strip_marker(raw: &str) -> (String, bool) {
    let found = raw.contains(COMPLETION_MARKER);
    let mut text = raw.to_string();
    while text.contains(COMPLETION_MARKER) {
        text = text.replace(COMPLETION_MARKER, "");
    }
    (text.trim().to_string(), found)
}

/// Interviewer reply for one exchange, as returned by the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReply {
    /// Visible text, marker already removed.
    pub message: String,
    /// True when this reply ends the interview.
    pub is_complete: bool,
}

impl TurnReply {
    /// Builds a reply from assistant text.
    ///
    /// Complete if the marker was present or this is the last exchange.
    pub fn from_assistant_text(raw: &str, exchange: i64) -> Self {
        let raw = if raw.trim().is_empty() { CLARIFY_REPLY } else { raw };
        let (message, had_marker) = strip_marker(raw);
        Self {
            message,
            is_complete: had_marker || is_final_exchange(exchange),
        }
    }

    /// Scripted reply used when no credential is configured.
    pub fn scripted(exchange: i64) -> Self {
        Self::from_assistant_text(fallback_reply(exchange), exchange)
    }

    /// Reply substituted for a failed live call.
    pub fn degraded(exchange: i64) -> Self {
        Self {
            message: degraded_reply(exchange).to_string(),
            is_complete: is_final_exchange(exchange),
        }
    }
}
