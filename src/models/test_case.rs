//! Test case model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Test case database model
///
/// Immutable once created. `position` carries the ordering that per-case
/// verdicts are aligned against; `is_hidden` decides whether the run path
/// (public cases only) or only the submit path (all cases) sees it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub input: String,
    pub expected_output: String,
    pub is_hidden: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl TestCase {
    /// Get a preview of the input (truncated)
    pub fn input_preview(&self, max_len: usize) -> String {
        if self.input.len() <= max_len {
            self.input.clone()
        } else {
            format!("{}...", &self.input[..max_len])
        }
    }
}
