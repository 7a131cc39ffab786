//! Survey domain module.
//!
//! The survey → chat → complete flow, the result it produces and the payload
//! submitted to the form endpoint.

mod flow;
mod result;
mod stage;

pub use flow::{SurveyFlow, SurveyFlowError};
pub use result::{SummaryState, SurveyResult, SurveySubmission};
pub use stage::SurveyStage;
