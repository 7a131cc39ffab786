//! HTTP DTOs for survey submission.

use serde::{Deserialize, Serialize};

use crate::application::SubmitSurveyCommand;
use crate::ports::SubmissionOutcome;

/// Body of `POST /api/submit`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSurveyRequest {
    pub personal_rating: u8,
    pub team_rating: u8,
    #[serde(default)]
    pub chat_history: String,
    #[serde(default)]
    pub chat_summary: String,
}

impl From<SubmitSurveyRequest> for SubmitSurveyCommand {
    fn from(req: SubmitSurveyRequest) -> Self {
        Self {
            personal_rating: req.personal_rating,
            team_rating: req.team_rating,
            chat_history: req.chat_history,
            chat_summary: req.chat_summary,
        }
    }
}

/// The survey is complete whether or not delivery succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSurveyResponse {
    pub status: String,
    pub delivered: bool,
}

impl From<&SubmissionOutcome> for SubmitSurveyResponse {
    fn from(outcome: &SubmissionOutcome) -> Self {
        Self {
            status: "complete".to_string(),
            delivered: outcome.is_delivered(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }
}
