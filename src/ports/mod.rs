//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Chat-completion gateway
//! - `CompletionMode` - Live provider or scripted fallback, chosen at startup
//! - `FormSubmitter` - Best-effort delivery to the form-collection endpoint

mod ai_provider;
mod completion_mode;
mod form_submitter;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message,
    MessageRole, ProviderInfo, RequestMetadata,
};
pub use completion_mode::CompletionMode;
pub use form_submitter::{FormSubmitter, SubmissionError, SubmissionOutcome};
