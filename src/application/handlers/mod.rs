//! Command handlers.
//!
//! - `ChatTurnHandler` - Answers one interview exchange
//! - `SummarizeHandler` - Condenses the interview into a digest
//! - `SubmitSurveyHandler` - Delivers the finished survey to the form endpoint

mod chat_turn;
mod submit_survey;
mod summarize_concerns;

pub use chat_turn::{
    ChatTurnCommand, ChatTurnHandler, CHAT_HISTORY_WINDOW, CHAT_MAX_TOKENS, CHAT_TEMPERATURE,
};
pub use submit_survey::{SubmitSurveyCommand, SubmitSurveyHandler};
pub use summarize_concerns::{SummarizeHandler, SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE};
