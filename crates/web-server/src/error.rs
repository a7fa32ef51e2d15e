use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::{IssueCode, ValidationErrors, ValidationIssue};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Store failures are logged with full detail but reach the caller only as a
/// generic 500. Validation failures are the caller's fault and are returned in
/// full as a 400.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                let body = Json(json!({ "error": "An internal database error occurred" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::Validation(errors) => {
                tracing::debug!(issues = errors.len(), "Rejected invalid questionnaire.");
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            AppError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection, "Rejected unreadable request body.");
                let errors = ValidationErrors(vec![ValidationIssue::new(
                    &[],
                    IssueCode::InvalidType,
                    rejection.body_text(),
                )]);
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
        }
    }
}
