//! HTTP adapter for survey submission.
//!
//! - `POST /api/submit` - Best-effort delivery of ratings, transcript and summary

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, SubmitSurveyRequest, SubmitSurveyResponse};
pub use handlers::submit_survey;
pub use routes::survey_routes;
