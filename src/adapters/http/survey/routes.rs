//! HTTP routes for survey submission.

use axum::{routing::post, Router};

use super::super::AppState;
use super::handlers::submit_survey;

pub fn survey_routes() -> Router<AppState> {
    Router::new().route("/submit", post(submit_survey))
}
