//! Conversation domain module.
//!
//! The three-exchange concerns interview: messages and transcript, the
//! completion marker, the scripted fallback replies, interviewer prompts and
//! the exchange controller that ties them together.

mod completion;
mod controller;
mod fallback;
mod message;
mod prompts;
mod state;

pub use completion::{
    is_final_exchange, strip_marker, TurnReply, COMPLETION_MARKER, MAX_EXCHANGES,
};
pub use controller::{ExchangeController, ExchangeError, ExchangeOutcome, ExchangeRequest};
pub use fallback::{
    degraded_reply, fallback_index, fallback_reply, CLARIFY_REPLY, FALLBACK_REPLIES,
    THANKS_REPLY,
};
pub use message::{ChatMessage, ChatRole, Transcript};
pub use prompts::{greeting, interviewer_system_prompt};
pub use state::ExchangeStatus;
