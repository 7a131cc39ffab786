//! Pulse Check - Line-to-Slack migration pulse survey
//!
//! Two ratings, a short interview about concerns (live model or scripted
//! replies), a one-paragraph digest of that interview, and a best-effort
//! submission of the result to a form-collection endpoint.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
