use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for every server-side failure. Callers cannot tell bad
/// input apart from an unavailable backend; the real cause goes to the log.
pub const GENERIC_FAILURE: &str = "An internal server error occurred";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("File store error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound(_) => {
                return (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": self.to_string() })),
                )
                    .into_response();
            }
            AppError::Validation(msg) => tracing::warn!("Rejected request: {msg}"),
            AppError::Database(e) => tracing::error!("Database error: {e}"),
            AppError::Io(e) => tracing::error!("File store error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": GENERIC_FAILURE })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_with_message() {
        let response = AppError::NotFound("Job".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "Job not found" }));
    }

    #[tokio::test]
    async fn test_validation_is_indistinguishable_from_storage_failure() {
        let validation = AppError::Validation("title is required".to_string()).into_response();
        let storage = AppError::Database(sqlx::Error::PoolTimedOut).into_response();

        assert_eq!(validation.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(validation).await, body_json(storage).await);
    }

    #[tokio::test]
    async fn test_io_error_maps_to_500() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": GENERIC_FAILURE }));
    }
}
