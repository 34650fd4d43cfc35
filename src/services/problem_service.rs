//! Problem catalog service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, TestCaseRepository},
    error::{AppError, AppResult},
    models::{Problem, TestCase},
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List problems with pagination and filters
    pub async fn list_problems(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        difficulty: Option<&str>,
        tag: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        ProblemRepository::list(pool, offset, limit, search, difficulty, tag).await
    }

    /// Get a problem by ID
    pub async fn get_problem(pool: &PgPool, id: &Uuid) -> AppResult<Problem> {
        ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// List a problem's public test cases (the run path's visible set)
    pub async fn list_public_test_cases(
        pool: &PgPool,
        problem_id: &Uuid,
    ) -> AppResult<Vec<TestCase>> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        TestCaseRepository::list_for_problem(pool, problem_id, false).await
    }
}
