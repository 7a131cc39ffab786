//! HTTP handler for the chat endpoint.

use axum::body::Bytes;
use axum::extract::{Json, State};

use crate::application::ChatTurnCommand;
use crate::domain::conversation::TurnReply;
use crate::ports::RequestMetadata;

use super::super::AppState;
use super::dto::{ChatRequest, ChatResponse, DEFAULT_EXCHANGE};

/// POST /api/chat - Answer one interview exchange
///
/// Always `200`. Bodies that are not JSON get the degraded reply for the
/// first exchange; partly readable ones are answered with what was salvaged.
pub async fn chat_turn(State(state): State<AppState>, body: Bytes) -> Json<ChatResponse> {
    let Some(req) = ChatRequest::from_body(&body) else {
        tracing::warn!("Unreadable chat body, sending degraded reply");
        return Json(TurnReply::degraded(DEFAULT_EXCHANGE).into());
    };

    let cmd = ChatTurnCommand {
        messages: req.messages,
        personal_rating: req.survey_data.personal_rating,
        team_rating: req.survey_data.team_rating,
        exchange_number: req.exchange_count,
    };

    let reply = state.chat.handle(cmd, RequestMetadata::detached()).await;
    Json(reply.into())
}
