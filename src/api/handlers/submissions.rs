//! Handler for request form submissions over JSON.

use axum::{Json, http::StatusCode};

use crate::api::dto::submission::SubmissionResponse;
use crate::application::submission::SubmissionForm;
use crate::error::AppError;

/// Validates a request form submission and returns its normalized form.
///
/// # Endpoint
///
/// `POST /api/submissions`
///
/// # Request Body
///
/// ```json
/// { "country": "CD", "date": "2024-03-02", "access": "mobile-web" }
/// ```
///
/// # Response
///
/// `201 Created` with the submission, its `year`/`month`/`day` parts and the
/// `location` of the country view.
///
/// # Errors
///
/// Returns 400 Bad Request with per-field messages when country or date is
/// missing or malformed.
pub async fn submission_handler(
    Json(form): Json<SubmissionForm>,
) -> Result<(StatusCode, Json<SubmissionResponse>), AppError> {
    let submission = form.into_submission()?;
    tracing::debug!(country = %submission.country, date = %submission.date, "Submission accepted");

    Ok((StatusCode::CREATED, Json(submission.into())))
}
