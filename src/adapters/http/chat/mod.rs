//! HTTP adapter for the interview endpoint.
//!
//! - `POST /api/chat` - Interviewer reply for one exchange

mod dto;
mod handlers;
mod routes;

pub(crate) use dto::readable_messages;
pub use dto::{ChatRequest, ChatResponse, SurveyDataDto, DEFAULT_EXCHANGE};
pub use handlers::chat_turn;
pub use routes::chat_routes;
