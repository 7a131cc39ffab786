//! SurveySession - One respondent's walk through the whole survey.
//!
//! Drives the survey flow and the exchange controller against the same
//! handlers the HTTP endpoints use, so a session can run in-process (tests,
//! scripted clients) with identical behaviour.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::conversation::{ExchangeController, ExchangeError, ExchangeOutcome, Transcript};
use crate::domain::foundation::{Rating, SurveySessionId};
use crate::domain::summary::SummaryInput;
use crate::domain::survey::{SurveyFlow, SurveyFlowError, SurveyStage};
use crate::ports::{RequestMetadata, SubmissionOutcome};

use super::handlers::{ChatTurnCommand, ChatTurnHandler, SubmitSurveyHandler, SummarizeHandler};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveySessionError {
    #[error(transparent)]
    Flow(#[from] SurveyFlowError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error("The chat has not been opened")]
    ChatNotOpen,

    #[error("The interview is still in progress")]
    ChatInProgress,
}

pub struct SurveySession {
    id: SurveySessionId,
    flow: SurveyFlow,
    controller: Option<ExchangeController>,
    chat: Arc<ChatTurnHandler>,
    summarizer: Arc<SummarizeHandler>,
    submitter: Arc<SubmitSurveyHandler>,
}

impl SurveySession {
    pub fn new(
        chat: Arc<ChatTurnHandler>,
        summarizer: Arc<SummarizeHandler>,
        submitter: Arc<SubmitSurveyHandler>,
    ) -> Self {
        Self {
            id: SurveySessionId::new(),
            flow: SurveyFlow::new(),
            controller: None,
            chat,
            summarizer,
            submitter,
        }
    }

    pub fn id(&self) -> SurveySessionId {
        self.id
    }

    pub fn stage(&self) -> SurveyStage {
        self.flow.stage()
    }

    pub fn flow(&self) -> &SurveyFlow {
        &self.flow
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.controller.as_ref().map(|c| c.transcript())
    }

    pub fn select_personal(&mut self, rating: Rating) -> Result<(), SurveySessionError> {
        Ok(self.flow.select_personal(rating)?)
    }

    pub fn select_team(&mut self, rating: Rating) -> Result<(), SurveySessionError> {
        Ok(self.flow.select_team(rating)?)
    }

    /// Enters the chat stage with a fresh interview and returns it.
    pub fn open_chat(&mut self) -> Result<&Transcript, SurveySessionError> {
        let ratings = self.flow.enter_chat()?;
        let controller = self.controller.insert(ExchangeController::open(ratings));
        tracing::debug!(session_id = %self.id, "Interview opened");
        Ok(controller.transcript())
    }

    /// Leaves the chat. The interview so far is discarded.
    pub fn back(&mut self) -> Result<(), SurveySessionError> {
        self.flow.back()?;
        self.controller = None;
        Ok(())
    }

    /// Sends one respondent message and records the interviewer's reply.
    pub async fn send_message(&mut self, text: &str) -> Result<ExchangeOutcome, SurveySessionError> {
        if self.flow.stage() != SurveyStage::Chat {
            return Err(SurveySessionError::ChatNotOpen);
        }
        let controller = self
            .controller
            .as_mut()
            .ok_or(SurveySessionError::ChatNotOpen)?;

        let request = controller.begin_turn(text)?;
        let command = ChatTurnCommand {
            messages: request.messages,
            personal_rating: request.ratings.personal.value(),
            team_rating: request.ratings.team.value(),
            exchange_number: request.exchange_number,
        };
        let metadata = RequestMetadata::new(
            self.id,
            format!("{}-{}", self.id, request.exchange_number),
        );

        let reply = self.chat.handle(command, metadata).await;
        Ok(controller.complete_turn(&reply)?)
    }

    /// Closes a finished interview and summarizes it exactly once.
    pub async fn finish_chat(&mut self) -> Result<String, SurveySessionError> {
        let controller = self
            .controller
            .as_ref()
            .ok_or(SurveySessionError::ChatNotOpen)?;
        if !controller.is_finished() {
            return Err(SurveySessionError::ChatInProgress);
        }
        let transcript = controller.transcript().clone();

        self.flow.finish_chat(&transcript)?;
        let summary = self
            .summarizer
            .handle(
                SummaryInput::Conversation(transcript),
                RequestMetadata::new(self.id, format!("{}-summary", self.id)),
            )
            .await;
        self.flow.record_summary(summary.clone())?;

        tracing::info!(session_id = %self.id, "Interview summarized");
        Ok(summary)
    }

    /// Posts the result once and completes the survey whatever happens.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, SurveySessionError> {
        let submission = self.flow.submission()?;
        if !self.flow.can_submit() {
            return Err(SurveyFlowError::WrongStage(self.flow.stage()).into());
        }
        let outcome = self.submitter.deliver(&submission).await;
        self.flow.mark_complete()?;
        Ok(outcome)
    }
}
