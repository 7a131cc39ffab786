//! HTTP routes for the summarize endpoint.

use axum::{routing::post, Router};

use super::super::AppState;
use super::handlers::summarize;

pub fn summarize_routes() -> Router<AppState> {
    Router::new().route("/summarize", post(summarize))
}
