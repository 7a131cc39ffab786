//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the survey domain.

mod errors;
mod ids;
mod rating;
mod state_machine;

pub use errors::ValidationError;
pub use ids::SurveySessionId;
pub use rating::{Rating, RatingPair};
pub use state_machine::StateMachine;
