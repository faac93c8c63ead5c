use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::require_text;

/// A job posting as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
}

/// A validated job ready to be inserted. The id is assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
}

/// Raw job creation body, as decoded from JSON or a urlencoded form.
/// Every field is optional here so that a missing field is reported by
/// `validate` instead of by the body decoder.
#[derive(Debug, Default, Deserialize)]
pub struct JobPayload {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
}

impl JobPayload {
    pub fn validate(self) -> Result<NewJob, AppError> {
        let title = require_text("title", self.title)?;
        let company = require_text("company", self.company)?;
        let description = require_text("description", self.description)?;
        let deadline = parse_deadline(&require_text("deadline", self.deadline)?)?;

        Ok(NewJob {
            title,
            company,
            description,
            deadline,
        })
    }
}

/// Accepts a calendar date (`2025-12-31`, midnight UTC) or an RFC 3339 timestamp.
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| AppError::Validation(format!("deadline '{raw}' is not a valid date")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn payload() -> JobPayload {
        JobPayload {
            title: Some("Engineer".to_string()),
            company: Some("Acme".to_string()),
            description: Some("Build things".to_string()),
            deadline: Some("2025-12-31".to_string()),
        }
    }

    #[test]
    fn test_parse_deadline_calendar_date_is_midnight_utc() {
        let deadline = parse_deadline("2025-12-31").unwrap();
        assert_eq!(deadline, Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_deadline_rfc3339_is_normalised_to_utc() {
        let deadline = parse_deadline("2025-12-31T10:00:00+02:00").unwrap();
        assert_eq!(deadline, Utc.with_ymd_and_hms(2025, 12, 31, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_deadline_rejects_garbage() {
        assert!(parse_deadline("next friday").is_err());
        assert!(parse_deadline("2025-13-40").is_err());
    }

    #[test]
    fn test_validate_complete_payload() {
        let job = payload().validate().unwrap();
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.deadline.date_naive().to_string(), "2025-12-31");
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let strip: [fn(&mut JobPayload); 4] = [
            |p| p.title = None,
            |p| p.company = None,
            |p| p.description = None,
            |p| p.deadline = None,
        ];
        for remove in strip {
            let mut p = payload();
            remove(&mut p);
            assert!(matches!(p.validate(), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_job_serialises_with_document_id() {
        let job = Job {
            id: Uuid::nil(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Build things".to_string(),
            deadline: Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["_id"], Uuid::nil().to_string());
        assert_eq!(value["deadline"], "2025-12-31T00:00:00Z");
        assert!(value.get("id").is_none());
    }
}
