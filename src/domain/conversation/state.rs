//! Exchange state machine.
//!
//! Defines the lifecycle states of the concerns interview and valid transitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle state of the interview.
///
/// - `Idle`: waiting for the respondent's next message
/// - `AwaitingResponse`: a message was sent, reply outstanding
/// - `TurnComplete`: reply recorded, deciding whether to continue
/// - `Finished`: no more input accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeStatus {
    #[default]
    Idle,
    AwaitingResponse,
    TurnComplete,
    Finished,
}

impl StateMachine for ExchangeStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ExchangeStatus::*;
        matches!(
            (self, target),
            (Idle, AwaitingResponse)
                | (AwaitingResponse, TurnComplete)
                | (TurnComplete, Idle)
                | (TurnComplete, Finished)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ExchangeStatus::*;
        match self {
            Idle => vec![AwaitingResponse],
            AwaitingResponse => vec![TurnComplete],
            TurnComplete => vec![Idle, Finished],
            Finished => vec![],
        }
    }
}
