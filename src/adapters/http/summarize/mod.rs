//! HTTP adapter for the summarizer.
//!
//! - `POST /api/summarize` - Digest of a conversation or a concerns list

mod dto;
mod handlers;
mod routes;

pub use dto::{SummarizeRequest, SummarizeResponse};
pub use handlers::summarize;
pub use routes::summarize_routes;
