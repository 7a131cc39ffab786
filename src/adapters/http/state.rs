//! Shared state for the HTTP adapters.

use std::sync::Arc;

use crate::application::{ChatTurnHandler, SubmitSurveyHandler, SummarizeHandler};
use crate::ports::{CompletionMode, FormSubmitter};

/// Handlers shared by every request. Holds no per-session data.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatTurnHandler>,
    pub summarizer: Arc<SummarizeHandler>,
    pub submitter: Arc<SubmitSurveyHandler>,
    /// `"live"` or `"fallback"`, fixed at startup.
    pub mode: &'static str,
}

impl AppState {
    pub fn new(mode: CompletionMode, forms: Arc<dyn FormSubmitter>) -> Self {
        Self {
            chat: Arc::new(ChatTurnHandler::new(mode.clone())),
            summarizer: Arc::new(SummarizeHandler::new(mode.clone())),
            submitter: Arc::new(SubmitSurveyHandler::new(forms)),
            mode: mode.name(),
        }
    }
}
