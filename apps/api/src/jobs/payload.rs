use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

use crate::errors::AppError;
use crate::models::job::JobPayload;

/// Job creation body, decoded from either JSON or a urlencoded form.
/// Any decoding failure becomes a validation error rather than a 4xx rejection.
pub struct JobBody(pub JobPayload);

#[async_trait]
impl<S> FromRequest<S> for JobBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(payload) = Form::<JobPayload>::from_request(req, state).await?;
            Ok(JobBody(payload))
        } else {
            let Json(payload) = Json::<JobPayload>::from_request(req, state).await?;
            Ok(JobBody(payload))
        }
    }
}
