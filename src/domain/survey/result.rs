//! Survey result and the submission payload built from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::RatingPair;

/// Summary slot of a result. Pending until the summarizer answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum SummaryState {
    Pending,
    Ready(String),
}

/// Ratings, transcript and summary of one finished interview.
///
/// Created once when the chat stage ends. Only the summary slot changes
/// afterwards, and only once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResult {
    ratings: RatingPair,
    transcript_text: String,
    summary: SummaryState,
    created_at: DateTime<Utc>,
}

impl SurveyResult {
    pub fn pending(ratings: RatingPair, transcript_text: impl Into<String>) -> Self {
        Self {
            ratings,
            transcript_text: transcript_text.into(),
            summary: SummaryState::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn ratings(&self) -> RatingPair {
        self.ratings
    }

    pub fn transcript_text(&self) -> &str {
        &self.transcript_text
    }

    pub fn summary(&self) -> Option<&str> {
        match &self.summary {
            SummaryState::Ready(text) => Some(text),
            SummaryState::Pending => None,
        }
    }

    pub fn summary_state(&self) -> &SummaryState {
        &self.summary
    }

    pub fn is_summary_pending(&self) -> bool {
        self.summary == SummaryState::Pending
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Fills the summary slot. Returns false if it was already filled.
    pub(crate) fn fill_summary(&mut self, summary: String) -> bool {
        if !self.is_summary_pending() {
            return false;
        }
        self.summary = SummaryState::Ready(summary);
        true
    }

    /// Payload for the form endpoint, once the summary exists.
    pub fn submission(&self) -> Option<SurveySubmission> {
        self.summary().map(|summary| SurveySubmission {
            personal_rating: self.ratings.personal.value(),
            team_rating: self.ratings.team.value(),
            chat_history: self.transcript_text.clone(),
            chat_summary: summary.to_string(),
        })
    }
}

/// The four fields sent to the form-collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    pub personal_rating: u8,
    pub team_rating: u8,
    pub chat_history: String,
    pub chat_summary: String,
}
