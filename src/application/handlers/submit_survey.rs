//! SubmitSurveyHandler - Best-effort delivery of a finished survey.

use std::sync::Arc;

use crate::domain::foundation::{RatingPair, ValidationError};
use crate::domain::survey::SurveySubmission;
use crate::ports::{FormSubmitter, SubmissionOutcome};

/// Submission as received over HTTP, ratings not yet checked.
#[derive(Debug, Clone)]
pub struct SubmitSurveyCommand {
    pub personal_rating: u8,
    pub team_rating: u8,
    pub chat_history: String,
    pub chat_summary: String,
}

pub struct SubmitSurveyHandler {
    submitter: Arc<dyn FormSubmitter>,
}

impl SubmitSurveyHandler {
    pub fn new(submitter: Arc<dyn FormSubmitter>) -> Self {
        Self { submitter }
    }

    /// Validates the ratings, then delivers.
    ///
    /// # Errors
    ///
    /// `ValidationError` if either rating is outside 1..=5. Nothing is sent.
    pub async fn handle(&self, cmd: SubmitSurveyCommand) -> Result<SubmissionOutcome, ValidationError> {
        let ratings = RatingPair::try_from_raw(cmd.personal_rating, cmd.team_rating)?;
        let submission = SurveySubmission {
            personal_rating: ratings.personal.value(),
            team_rating: ratings.team.value(),
            chat_history: cmd.chat_history,
            chat_summary: cmd.chat_summary,
        };
        Ok(self.deliver(&submission).await)
    }

    /// One POST. The outcome is logged and returned, never raised.
    pub async fn deliver(&self, submission: &SurveySubmission) -> SubmissionOutcome {
        let outcome = SubmissionOutcome::from(self.submitter.submit(submission).await);
        match &outcome {
            SubmissionOutcome::Delivered => tracing::info!(
                personal_rating = submission.personal_rating,
                team_rating = submission.team_rating,
                "Survey delivered"
            ),
            SubmissionOutcome::Undelivered(reason) => {
                tracing::warn!(%reason, "Survey delivery failed, continuing")
            }
        }
        outcome
    }
}
