use std::path::PathBuf;

use axum::extract::Multipart;
use tracing::debug;

use crate::errors::AppError;
use crate::models::application::ApplicationForm;
use crate::uploads::{FileStore, RESUME_FIELD};

/// A parsed application submission. The resume, if present, is already on disk.
pub struct Submission {
    pub form: ApplicationForm,
    pub resume: Option<PathBuf>,
}

/// Streams the multipart body, writing the single `resume` file to the store
/// as soon as it is encountered and collecting the text fields.
pub async fn read_submission(
    mut multipart: Multipart,
    store: &FileStore,
) -> Result<Submission, AppError> {
    let mut form = ApplicationForm::default();
    let mut resume: Option<PathBuf> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        if name == RESUME_FIELD {
            if resume.is_some() {
                return Err(AppError::Validation(
                    "only one resume file may be uploaded".to_string(),
                ));
            }
            let Some(file_name) = field.file_name().map(str::to_string) else {
                return Err(AppError::Validation(format!(
                    "'{RESUME_FIELD}' must be a file upload"
                )));
            };
            let data = field.bytes().await?;
            resume = Some(store.save(Some(&file_name), data).await?);
            continue;
        }

        if field.file_name().is_some() {
            return Err(AppError::Validation(format!("unexpected file field '{name}'")));
        }

        let slot = match name.as_str() {
            "jobId" => &mut form.job_id,
            "name" => &mut form.name,
            "email" => &mut form.email,
            "phone" => &mut form.phone,
            "coverLetter" => &mut form.cover_letter,
            _ => {
                debug!("Ignoring unknown field: {name}");
                continue;
            }
        };
        *slot = Some(field.text().await?);
    }

    Ok(Submission { form, resume })
}
