//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::judge::Verdict;

/// Create submission response (submit path)
///
/// Only the aggregated status and timing are surfaced; the persisted
/// record is the source of truth, per-case detail stays server-side.
#[derive(Debug, Serialize)]
pub struct CreateSubmissionResponse {
    pub submission_id: Uuid,
    pub status: String,
    pub execution_time_ms: f64,
}

/// Per-case verdict surfaced on the run path
#[derive(Debug, Serialize)]
pub struct VerdictResponse {
    pub test_case_index: usize,
    pub status: String,
    pub stdout: String,
    pub stderr: String,
    pub compile_output: String,
    pub time_ms: f64,
}

impl From<Verdict> for VerdictResponse {
    fn from(v: Verdict) -> Self {
        Self {
            test_case_index: v.test_case_index,
            status: v.status.as_str().to_string(),
            stdout: v.stdout,
            stderr: v.stderr,
            compile_output: v.compile_output,
            time_ms: v.time_ms,
        }
    }
}

/// Run response (run path)
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub results: Vec<VerdictResponse>,
}

/// Submission response
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub problem_title: String,
    pub language_id: i32,
    pub status: String,
    pub execution_time_ms: Option<f64>,
    pub submitted_at: DateTime<Utc>,
}

/// Submission list response
#[derive(Debug, Serialize)]
pub struct SubmissionsListResponse {
    pub submissions: Vec<SubmissionResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
