//! Problem response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Problem, TestCase};

/// Problem response
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            difficulty: p.difficulty,
            tags: p.tags,
            created_at: p.created_at,
        }
    }
}

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Public test case response (the run path's visible set)
#[derive(Debug, Serialize)]
pub struct TestCaseResponse {
    pub id: Uuid,
    pub input: String,
    pub expected_output: String,
    pub position: i32,
}

impl From<TestCase> for TestCaseResponse {
    fn from(tc: TestCase) -> Self {
        Self {
            id: tc.id,
            input: tc.input,
            expected_output: tc.expected_output,
            position: tc.position,
        }
    }
}

/// Test case list response
#[derive(Debug, Serialize)]
pub struct TestCasesListResponse {
    pub testcases: Vec<TestCaseResponse>,
}
