pub mod application;
pub mod job;

use crate::errors::AppError;

/// Returns the value when it is present and not blank.
/// The value is kept exactly as sent; only the emptiness check trims.
pub(crate) fn require_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}
