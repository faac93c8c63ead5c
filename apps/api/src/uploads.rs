//! Local file store for uploaded resumes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

/// Multipart field that carries the resume file.
pub const RESUME_FIELD: &str = "resume";

const FALLBACK_NAME: &str = "resume";

/// Directory holding uploaded files. No quotas, no cleanup.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates the directory if it is missing. Safe to call when it already exists.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create upload directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the upload under a generated name and returns its path.
    /// Completes only once the bytes are on disk.
    pub async fn save(&self, original_name: Option<&str>, data: Bytes) -> Result<PathBuf, AppError> {
        let path = self
            .dir
            .join(stored_file_name(original_name, Utc::now().timestamp_millis()));
        tokio::fs::write(&path, &data).await?;
        info!("Stored upload ({} bytes) at {}", data.len(), path.display());
        Ok(path)
    }
}

/// `{millis}-{uuid}-{base name}`. Only the final component of the client
/// supplied name is kept so the file always lands inside the store.
pub fn stored_file_name(original_name: Option<&str>, unix_millis: i64) -> String {
    let base = original_name
        .map(|n| n.rsplit(['/', '\\']).next().unwrap_or(n))
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .unwrap_or(FALLBACK_NAME);
    format!("{unix_millis}-{}-{base}", Uuid::new_v4().simple())
}
