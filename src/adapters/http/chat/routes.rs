//! HTTP routes for the chat endpoint.

use axum::{routing::post, Router};

use super::super::AppState;
use super::handlers::chat_turn;

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat_turn))
}
