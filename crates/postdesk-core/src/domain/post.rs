use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Message returned when a creation request omits any business field.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";

/// Post entity - a social media publishing task for a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub platform: String,
    pub due_date: DateTime<Utc>,
    pub payment: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The six business fields of a post, all known to be present.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub brand: String,
    pub platform: String,
    pub due_date: DateTime<Utc>,
    pub payment: f64,
    pub status: String,
}

/// Creation input as received from a client, before presence checks.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub platform: Option<String>,
    pub due_date: Option<String>,
    pub payment: Option<f64>,
    pub status: Option<String>,
}

/// Partial replacement of business fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub platform: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub payment: Option<f64>,
    pub status: Option<String>,
}

impl Post {
    /// Create a new post with generated ID and timestamps.
    pub fn new(fields: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            brand: fields.brand,
            platform: fields.platform,
            due_date: fields.due_date,
            payment: fields.payment,
            status: fields.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in `changes` and refresh `updated_at`.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(brand) = changes.brand {
            self.brand = brand;
        }
        if let Some(platform) = changes.platform {
            self.platform = platform;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        if let Some(payment) = changes.payment {
            self.payment = payment;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        // Never step behind created_at, even under clock skew.
        self.updated_at = Utc::now().max(self.created_at);
    }
}

impl PostDraft {
    /// Check that every business field is present and turn the draft into a
    /// [`NewPost`].
    ///
    /// Empty strings and a zero payment count as absent. A present but
    /// unparseable due date is reported as [`DomainError::Malformed`].
    pub fn validate(self) -> Result<NewPost, DomainError> {
        let missing = || DomainError::Validation(ALL_FIELDS_REQUIRED.to_string());

        let title = non_empty(self.title).ok_or_else(missing)?;
        let brand = non_empty(self.brand).ok_or_else(missing)?;
        let platform = non_empty(self.platform).ok_or_else(missing)?;
        let raw_due_date = non_empty(self.due_date).ok_or_else(missing)?;
        let payment = self.payment.filter(|p| *p != 0.0).ok_or_else(missing)?;
        let status = non_empty(self.status).ok_or_else(missing)?;

        Ok(NewPost {
            title,
            brand,
            platform,
            due_date: parse_due_date(&raw_due_date)?,
            payment,
            status,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Parse a due date given either as an RFC 3339 timestamp or a plain
/// `YYYY-MM-DD` date (taken as midnight UTC).
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| DomainError::Malformed(format!("Invalid dueDate: '{}'", raw)))
}
