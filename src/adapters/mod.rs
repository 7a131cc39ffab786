//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Chat-completion providers (OpenAI, mock)
//! - `forms` - Form-collection submitters (Google Forms, mock)
//! - `http` - Axum REST API

pub mod ai;
pub mod forms;
pub mod http;
