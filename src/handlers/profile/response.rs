//! Profile response DTOs

use serde::Serialize;

/// Profile dashboard response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub total_submissions: i64,
    pub solved_count: i64,
    pub recent_solved: Vec<String>,
}
