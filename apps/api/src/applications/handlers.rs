//! Axum route handlers for the Applications API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::applications::multipart::read_submission;
use crate::errors::AppError;
use crate::models::application::Application;
use crate::state::AppState;

/// POST /api/applications
///
/// multipart/form-data with `jobId`, `name`, `email`, `phone`, `coverLetter`
/// and a `resume` file. The file is written before the record is inserted;
/// a failed insert leaves the file behind.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let submission = read_submission(multipart?, &state.uploads).await?;

    let resume = submission
        .resume
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let new_application = submission
        .form
        .validate(resume.to_string_lossy().into_owned())?;

    let application = state.applications.insert(new_application).await?;
    info!(
        "Received application {} for job {}",
        application.id, application.job_id
    );
    Ok((StatusCode::CREATED, Json(application)))
}
