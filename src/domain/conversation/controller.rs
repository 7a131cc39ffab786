//! Exchange controller - the respondent-side interview state machine.
//!
//! Owns the transcript and the exchange counter. Each round trip goes
//! `begin_turn` (respondent message appended, request built) then
//! `complete_turn` (reply appended, counter bumped, finish decided).
//!
//! # Invariants
//!
//! - The transcript starts with the greeting and is append-only
//! - `exchange_count` never exceeds the number of respondent messages
//! - The counter moves exactly once per completed round trip
//! - The completion marker never reaches the transcript

use thiserror::Error;

use crate::domain::foundation::{RatingPair, StateMachine, ValidationError};

use super::completion::{strip_marker, TurnReply, MAX_EXCHANGES};
use super::message::{ChatMessage, Transcript};
use super::prompts::greeting;
use super::state::ExchangeStatus;

/// Ways the controller refuses an operation. State is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("A reply is still outstanding")]
    ReplyPending,

    #[error("No message is waiting for a reply")]
    NoPendingMessage,

    #[error("The interview has finished")]
    Finished,

    #[error(transparent)]
    Transition(#[from] ValidationError),
}

/// Everything the chat endpoint needs to answer one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    /// Whole transcript including the new respondent message.
    pub messages: Vec<ChatMessage>,
    pub ratings: RatingPair,
    /// 1-indexed number of the exchange being requested.
    pub exchange_number: i64,
}

/// Result of recording a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeOutcome {
    /// Visible reply text.
    pub reply: String,
    /// Completed exchanges so far.
    pub exchange_count: u32,
    /// True when no further input is accepted.
    pub finished: bool,
}

/// Interview state for one respondent.
#[derive(Debug, Clone)]
pub struct ExchangeController {
    ratings: RatingPair,
    transcript: Transcript,
    exchange_count: u32,
    status: ExchangeStatus,
}

impl ExchangeController {
    /// Opens an interview with the greeting for these ratings.
    pub fn open(ratings: RatingPair) -> Self {
        Self {
            ratings,
            transcript: Transcript::with_greeting(greeting(
                ratings.personal.value(),
                ratings.team.value(),
            )),
            exchange_count: 0,
            status: ExchangeStatus::Idle,
        }
    }

    /// Appends a respondent message and builds the request for its reply.
    ///
    /// # Errors
    ///
    /// - `EmptyMessage` if `input` is blank
    /// - `ReplyPending` if the previous message has not been answered
    /// - `Finished` once the interview is over
    pub fn begin_turn(&mut self, input: &str) -> Result<ExchangeRequest, ExchangeError> {
        match self.status {
            ExchangeStatus::Finished => return Err(ExchangeError::Finished),
            ExchangeStatus::AwaitingResponse => return Err(ExchangeError::ReplyPending),
            _ => {}
        }
        if input.trim().is_empty() {
            return Err(ExchangeError::EmptyMessage);
        }

        self.status = self.status.transition_to(ExchangeStatus::AwaitingResponse)?;
        self.transcript.push(ChatMessage::user(input));

        Ok(ExchangeRequest {
            messages: self.transcript.messages().to_vec(),
            ratings: self.ratings,
            exchange_number: self.exchange_count as i64 + 1,
        })
    }

    /// Records the reply to the outstanding message.
    ///
    /// The marker is stripped again here; a reply that still carries one
    /// finishes the interview just like `is_complete` does.
    ///
    /// # Errors
    ///
    /// - `NoPendingMessage` if `begin_turn` was not called first
    pub fn complete_turn(&mut self, reply: &TurnReply) -> Result<ExchangeOutcome, ExchangeError> {
        if self.status != ExchangeStatus::AwaitingResponse {
            return Err(ExchangeError::NoPendingMessage);
        }

        let (text, had_marker) = strip_marker(&reply.message);
        self.status = self.status.transition_to(ExchangeStatus::TurnComplete)?;
        self.transcript.push(ChatMessage::assistant(text.clone()));
        self.exchange_count += 1;

        let finished = reply.is_complete || had_marker || self.exchange_count >= MAX_EXCHANGES;
        let next = if finished {
            ExchangeStatus::Finished
        } else {
            ExchangeStatus::Idle
        };
        self.status = self.status.transition_to(next)?;

        Ok(ExchangeOutcome {
            reply: text,
            exchange_count: self.exchange_count,
            finished,
        })
    }

    pub fn status(&self) -> ExchangeStatus {
        self.status
    }

    pub fn exchange_count(&self) -> u32 {
        self.exchange_count
    }

    pub fn is_finished(&self) -> bool {
        self.status == ExchangeStatus::Finished
    }

    pub fn ratings(&self) -> RatingPair {
        self.ratings
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
