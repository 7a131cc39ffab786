//! HTTP handler for survey submission.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::ValidationError;

use super::super::AppState;
use super::dto::{ErrorResponse, SubmitSurveyRequest, SubmitSurveyResponse};

/// POST /api/submit - Deliver a finished survey to the form endpoint
///
/// `200` with `delivered: false` when the form endpoint fails; `400` only for
/// an unreadable body or out-of-range ratings.
pub async fn submit_survey(
    State(state): State<AppState>,
    payload: Result<Json<SubmitSurveyRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    match state.submitter.handle(req.into()).await {
        Ok(outcome) => (StatusCode::OK, Json(SubmitSurveyResponse::from(&outcome))).into_response(),
        Err(err) => {
            let field = match &err {
                ValidationError::EmptyField { field }
                | ValidationError::OutOfRange { field, .. }
                | ValidationError::InvalidFormat { field, .. } => field.clone(),
            };
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(err.to_string(), &field)),
            )
                .into_response()
        }
    }
}
