//! Test case repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::TestCase};

/// Repository for test case database operations
pub struct TestCaseRepository;

impl TestCaseRepository {
    /// List a problem's test cases in evaluation order.
    ///
    /// With `include_hidden` false only public cases are returned (the run
    /// path); with it true the full set is returned (the submit path).
    pub async fn list_for_problem(
        pool: &PgPool,
        problem_id: &Uuid,
        include_hidden: bool,
    ) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"
            SELECT * FROM test_cases
            WHERE problem_id = $1
                AND ($2 OR NOT is_hidden)
            ORDER BY position
            "#,
        )
        .bind(problem_id)
        .bind(include_hidden)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }

    /// Count a problem's test cases
    pub async fn count_for_problem(pool: &PgPool, problem_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM test_cases WHERE problem_id = $1"#)
                .bind(problem_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}
