//! Application layer - Command handlers and the session orchestrator.
//!
//! Handlers are stateless over their ports and safe to share behind `Arc`.
//! `SurveySession` strings them together for one respondent.

pub mod handlers;
mod survey_session;

pub use handlers::{
    ChatTurnCommand, ChatTurnHandler, SubmitSurveyCommand, SubmitSurveyHandler, SummarizeHandler,
};
pub use survey_session::{SurveySession, SurveySessionError};
