//! Submission request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create submission request (submit path)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    /// Problem ID to submit for
    pub problem_id: Uuid,

    /// Judge service language identifier
    pub language_id: i32,

    /// Source code
    #[validate(length(min = 1, max = 1048576))] // 1MB max
    pub source_code: String,
}

/// Run request (ephemeral path, nothing persisted)
#[derive(Debug, Deserialize, Validate)]
pub struct RunRequest {
    /// Problem whose public test cases are used when none are inlined
    pub problem_id: Uuid,

    /// Judge service language identifier
    pub language_id: i32,

    /// Source code
    #[validate(length(min = 1, max = 1048576))]
    pub source_code: String,

    /// Inline test cases; falls back to the problem's public cases
    pub testcases: Option<Vec<RunTestCase>>,
}

/// Inline test case supplied on the run path
#[derive(Debug, Deserialize)]
pub struct RunTestCase {
    pub input: String,
    pub expected_output: String,
}

/// List submissions query parameters
#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub problem_id: Option<Uuid>,
}
