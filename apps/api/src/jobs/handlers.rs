//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::payload::JobBody;
use crate::models::job::Job;
use crate::state::AppState;

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(state.jobs.find_all().await?))
}

/// GET /api/jobs/:id
///
/// A malformed id is a server error, not a 404.
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::Validation(format!("'{id}' is not a valid job id")))?;

    state
        .jobs
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Job".to_string()))
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    JobBody(payload): JobBody,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let new_job = payload.validate()?;
    let job = state.jobs.insert(new_job).await?;
    info!("Created job {} ({} at {})", job.id, job.title, job.company);
    Ok((StatusCode::CREATED, Json(job)))
}
