//! ChatTurnHandler - Answers one interview exchange.
//!
//! Scripted in fallback mode. In live mode the gateway sees the interviewer
//! system prompt plus the last few transcript entries; any failure becomes
//! a canned reply so the turn always completes.

use crate::domain::conversation::{interviewer_system_prompt, ChatMessage, Transcript, TurnReply};
use crate::ports::{CompletionMode, CompletionRequest, RequestMetadata};

/// Transcript entries sent with each exchange.
pub const CHAT_HISTORY_WINDOW: usize = 5;
pub const CHAT_MAX_TOKENS: u32 = 500;
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// One exchange as received from the client.
///
/// Ratings are taken as sent; the interview only uses them for wording.
#[derive(Debug, Clone)]
pub struct ChatTurnCommand {
    pub messages: Vec<ChatMessage>,
    pub personal_rating: u8,
    pub team_rating: u8,
    /// 1-indexed exchange being answered.
    pub exchange_number: i64,
}

pub struct ChatTurnHandler {
    mode: CompletionMode,
}

impl ChatTurnHandler {
    pub fn new(mode: CompletionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> &CompletionMode {
        &self.mode
    }

    /// Never fails: errors from the gateway are folded into the reply.
    pub async fn handle(&self, cmd: ChatTurnCommand, metadata: RequestMetadata) -> TurnReply {
        let exchange = cmd.exchange_number;

        let Some(provider) = self.mode.provider() else {
            tracing::debug!(exchange, "Serving scripted reply");
            return TurnReply::scripted(exchange);
        };

        let transcript = Transcript::from_messages(cmd.messages);
        let request = CompletionRequest::new(metadata.clone())
            .with_system_prompt(interviewer_system_prompt(
                cmd.personal_rating,
                cmd.team_rating,
                exchange,
            ))
            .with_history(transcript.recent(CHAT_HISTORY_WINDOW))
            .with_max_tokens(CHAT_MAX_TOKENS)
            .with_temperature(CHAT_TEMPERATURE);

        tracing::debug!(
            trace_id = %metadata.trace_id,
            exchange,
            history = request.messages.len(),
            "Requesting interviewer reply"
        );

        match provider.complete(request).await {
            Ok(response) => TurnReply::from_assistant_text(&response.content, exchange),
            Err(err) => {
                tracing::warn!(
                    trace_id = %metadata.trace_id,
                    exchange,
                    error_kind = err.kind(),
                    error = %err,
                    "Completion failed, substituting canned reply"
                );
                TurnReply::degraded(exchange)
            }
        }
    }
}
