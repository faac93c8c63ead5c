use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::require_text;

/// A submitted job application. Write-only from the API's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "jobId")]
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Path of the stored resume file, under the upload directory.
    pub resume: String,
    #[serde(rename = "coverLetter")]
    pub cover_letter: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub cover_letter: String,
}

/// Text fields collected from the multipart form.
#[derive(Debug, Default)]
pub struct ApplicationForm {
    pub job_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cover_letter: Option<String>,
}

impl ApplicationForm {
    /// Pairs the form fields with the stored resume path.
    /// `job_id` must be a well-formed id but is not checked against existing jobs.
    pub fn validate(self, resume: String) -> Result<NewApplication, AppError> {
        let raw_job_id = require_text("jobId", self.job_id)?;
        let job_id = Uuid::parse_str(raw_job_id.trim())
            .map_err(|_| AppError::Validation(format!("jobId '{raw_job_id}' is not a valid id")))?;

        Ok(NewApplication {
            job_id,
            name: require_text("name", self.name)?,
            email: require_text("email", self.email)?,
            phone: require_text("phone", self.phone)?,
            resume,
            cover_letter: require_text("coverLetter", self.cover_letter)?,
        })
    }
}
