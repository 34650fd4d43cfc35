//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
///
/// Created with the `Pending` status before any judge call is made, then
/// mutated exactly once: `status_id` and `execution_time_ms` are written
/// together when evaluation finishes, and never again.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    #[serde(skip_serializing)]
    pub source_code: String,
    pub language_id: i32,
    pub status_id: i32,
    pub execution_time_ms: Option<f64>,
    pub submitted_at: DateTime<Utc>,
}

/// A `submission_statuses` row
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubmissionStatus {
    pub id: i32,
    pub status_name: String,
}
