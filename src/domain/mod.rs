//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ratings, IDs, errors, state machine trait)
//! - `conversation` - The three-exchange concerns interview and its controller
//! - `summary` - Summarizer input, prompts and canned digests
//! - `survey` - Survey stage flow, result and submission payload

pub mod conversation;
pub mod foundation;
pub mod summary;
pub mod survey;
