//! Survey form flow.
//!
//! Sequences rating selection, the interview hand-off, the summary and the
//! final submission. Ratings stay editable until the interview ends; the
//! result they end up in is immutable apart from its summary slot.

use thiserror::Error;

use crate::domain::conversation::Transcript;
use crate::domain::foundation::{Rating, RatingPair, StateMachine, ValidationError};

use super::result::{SurveyResult, SurveySubmission};
use super::stage::SurveyStage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyFlowError {
    #[error("Rating not selected: {0}")]
    MissingRating(&'static str),

    #[error("Ratings are locked once the interview has finished")]
    RatingsLocked,

    #[error("Operation not allowed in the {0} stage")]
    WrongStage(SurveyStage),

    #[error("The interview has already finished")]
    ChatFinished,

    #[error("No survey result exists yet")]
    NoResult,

    #[error("Summary is still pending")]
    SummaryPending,

    #[error("Summary has already been recorded")]
    SummaryAlreadyRecorded,

    #[error(transparent)]
    Transition(#[from] ValidationError),
}

/// One respondent's pass through the survey.
#[derive(Debug, Clone, Default)]
pub struct SurveyFlow {
    stage: SurveyStage,
    personal: Option<Rating>,
    team: Option<Rating>,
    result: Option<SurveyResult>,
}

impl SurveyFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> SurveyStage {
        self.stage
    }

    pub fn personal_rating(&self) -> Option<Rating> {
        self.personal
    }

    pub fn team_rating(&self) -> Option<Rating> {
        self.team
    }

    pub fn result(&self) -> Option<&SurveyResult> {
        self.result.as_ref()
    }

    pub fn select_personal(&mut self, rating: Rating) -> Result<(), SurveyFlowError> {
        self.ensure_ratings_editable()?;
        self.personal = Some(rating);
        Ok(())
    }

    pub fn select_team(&mut self, rating: Rating) -> Result<(), SurveyFlowError> {
        self.ensure_ratings_editable()?;
        self.team = Some(rating);
        Ok(())
    }

    /// True when both ratings are chosen and the interview has not run yet.
    pub fn can_proceed_to_chat(&self) -> bool {
        self.stage == SurveyStage::Survey
            && self.result.is_none()
            && self.personal.is_some()
            && self.team.is_some()
    }

    /// Moves to the chat stage and hands back the confirmed ratings.
    pub fn enter_chat(&mut self) -> Result<RatingPair, SurveyFlowError> {
        if self.result.is_some() {
            return Err(SurveyFlowError::ChatFinished);
        }
        let personal = self
            .personal
            .ok_or(SurveyFlowError::MissingRating("personal_rating"))?;
        let team = self.team.ok_or(SurveyFlowError::MissingRating("team_rating"))?;

        self.stage = self.stage.transition_to(SurveyStage::Chat)?;
        Ok(RatingPair::new(personal, team))
    }

    /// Leaves the chat stage without finishing the interview.
    pub fn back(&mut self) -> Result<(), SurveyFlowError> {
        if self.stage != SurveyStage::Chat {
            return Err(SurveyFlowError::WrongStage(self.stage));
        }
        self.stage = self.stage.transition_to(SurveyStage::Survey)?;
        Ok(())
    }

    /// Ends the interview: stores the transcript text in a result whose
    /// summary is pending and returns to the survey stage for the preview.
    pub fn finish_chat(&mut self, transcript: &Transcript) -> Result<&SurveyResult, SurveyFlowError> {
        if self.stage != SurveyStage::Chat {
            return Err(SurveyFlowError::WrongStage(self.stage));
        }
        if self.result.is_some() {
            return Err(SurveyFlowError::ChatFinished);
        }
        let personal = self
            .personal
            .ok_or(SurveyFlowError::MissingRating("personal_rating"))?;
        let team = self.team.ok_or(SurveyFlowError::MissingRating("team_rating"))?;

        self.stage = self.stage.transition_to(SurveyStage::Survey)?;
        Ok(self.result.insert(SurveyResult::pending(
            RatingPair::new(personal, team),
            transcript.to_text(),
        )))
    }

    pub fn record_summary(&mut self, summary: impl Into<String>) -> Result<(), SurveyFlowError> {
        if self.stage == SurveyStage::Complete {
            return Err(SurveyFlowError::WrongStage(self.stage));
        }
        let result = self.result.as_mut().ok_or(SurveyFlowError::NoResult)?;
        if result.fill_summary(summary.into()) {
            Ok(())
        } else {
            Err(SurveyFlowError::SummaryAlreadyRecorded)
        }
    }

    pub fn can_submit(&self) -> bool {
        self.stage == SurveyStage::Survey
            && self.result.as_ref().is_some_and(|r| r.summary().is_some())
    }

    /// Payload to post. Only available once the summary exists.
    pub fn submission(&self) -> Result<SurveySubmission, SurveyFlowError> {
        let result = self.result.as_ref().ok_or(SurveyFlowError::NoResult)?;
        result.submission().ok_or(SurveyFlowError::SummaryPending)
    }

    /// Enters the terminal stage. Delivery outcome does not matter here.
    pub fn mark_complete(&mut self) -> Result<(), SurveyFlowError> {
        if !self.can_submit() {
            return match self.stage {
                SurveyStage::Survey => Err(self
                    .submission()
                    .err()
                    .unwrap_or(SurveyFlowError::SummaryPending)),
                stage => Err(SurveyFlowError::WrongStage(stage)),
            };
        }
        self.stage = self.stage.transition_to(SurveyStage::Complete)?;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.stage == SurveyStage::Complete
    }

    fn ensure_ratings_editable(&self) -> Result<(), SurveyFlowError> {
        if self.result.is_some() {
            return Err(SurveyFlowError::RatingsLocked);
        }
        if self.stage != SurveyStage::Survey {
            return Err(SurveyFlowError::WrongStage(self.stage));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::ChatMessage;

    fn rated() -> SurveyFlow {
        let mut flow = SurveyFlow::new();
        flow.select_personal(Rating::High).unwrap();
        flow.select_team(Rating::Low).unwrap();
        flow
    }

    fn transcript() -> Transcript {
        Transcript::from_messages(vec![
            ChatMessage::assistant("hello"),
            ChatMessage::user("worried"),
        ])
    }

    #[test]
    fn chat_requires_both_ratings() {
        let mut flow = SurveyFlow::new();
        flow.select_personal(Rating::High).unwrap();
        assert!(!flow.can_proceed_to_chat());
        assert_eq!(
            flow.enter_chat(),
            Err(SurveyFlowError::MissingRating("team_rating"))
        );
        assert_eq!(flow.stage(), SurveyStage::Survey);
    }

    #[test]
    fn ratings_can_be_reselected_before_chat() {
        let mut flow = rated();
        flow.select_personal(Rating::VeryHigh).unwrap();
        let pair = flow.enter_chat().unwrap();
        assert_eq!(pair.personal, Rating::VeryHigh);
        assert_eq!(flow.stage(), SurveyStage::Chat);
    }

    #[test]
    fn back_returns_to_survey_with_ratings_kept() {
        let mut flow = rated();
        flow.enter_chat().unwrap();
        flow.back().unwrap();
        assert_eq!(flow.stage(), SurveyStage::Survey);
        assert_eq!(flow.team_rating(), Some(Rating::Low));
        assert_eq!(flow.back(), Err(SurveyFlowError::WrongStage(SurveyStage::Survey)));
    }

    #[test]
    fn finishing_chat_creates_pending_result_and_locks_ratings() {
        let mut flow = rated();
        flow.enter_chat().unwrap();
        let result = flow.finish_chat(&transcript()).unwrap();
        assert!(result.is_summary_pending());
        assert_eq!(result.transcript_text(), "AI: hello\n\nUser: worried");

        assert_eq!(flow.stage(), SurveyStage::Survey);
        assert_eq!(
            flow.select_personal(Rating::VeryLow),
            Err(SurveyFlowError::RatingsLocked)
        );
        assert_eq!(flow.enter_chat(), Err(SurveyFlowError::ChatFinished));
    }

    #[test]
    fn submit_waits_for_summary() {
        let mut flow = rated();
        flow.enter_chat().unwrap();
        flow.finish_chat(&transcript()).unwrap();
        assert!(!flow.can_submit());
        assert_eq!(flow.submission(), Err(SurveyFlowError::SummaryPending));
        assert_eq!(flow.mark_complete(), Err(SurveyFlowError::SummaryPending));

        flow.record_summary("digest").unwrap();
        assert!(flow.can_submit());
        assert_eq!(
            flow.record_summary("again"),
            Err(SurveyFlowError::SummaryAlreadyRecorded)
        );
    }

    #[test]
    fn complete_is_terminal() {
        let mut flow = rated();
        flow.enter_chat().unwrap();
        flow.finish_chat(&transcript()).unwrap();
        flow.record_summary("digest").unwrap();
        flow.mark_complete().unwrap();

        assert!(flow.is_complete());
        assert!(!flow.can_submit());
        assert!(flow.select_team(Rating::High).is_err());
        assert!(flow.enter_chat().is_err());
        assert!(flow.record_summary("x").is_err());
        assert_eq!(
            flow.mark_complete(),
            Err(SurveyFlowError::WrongStage(SurveyStage::Complete))
        );
    }

    #[test]
    fn mark_complete_without_result() {
        let mut flow = rated();
        assert_eq!(flow.mark_complete(), Err(SurveyFlowError::NoResult));
    }
}
