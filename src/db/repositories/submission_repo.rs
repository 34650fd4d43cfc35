//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Submission};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Insert a new submission in the pending state
    pub async fn create_pending(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
        source_code: &str,
        language_id: i32,
        pending_status_id: i32,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (user_id, problem_id, source_code, language_id, status_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(source_code)
        .bind(language_id)
        .bind(pending_status_id)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Write the final status and timing for a submission.
    ///
    /// Status and execution time land in one UPDATE, and the guard on the
    /// pending status makes the write idempotent: a repeat call matches
    /// zero rows, so a finalized submission is never re-entered.
    pub async fn finalize(
        pool: &PgPool,
        id: &Uuid,
        status_id: i32,
        execution_time_ms: f64,
        pending_status_id: i32,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE submissions
            SET status_id = $2, execution_time_ms = $3
            WHERE id = $1 AND status_id = $4
            "#,
        )
        .bind(id)
        .bind(status_id)
        .bind(execution_time_ms)
        .bind(pending_status_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List a user's submissions with pagination
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: Option<&Uuid>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Submission>, i64)> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE user_id = $1
                AND ($2::uuid IS NULL OR problem_id = $2)
            ORDER BY submitted_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM submissions
            WHERE user_id = $1
                AND ($2::uuid IS NULL OR problem_id = $2)
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .fetch_one(pool)
        .await?;

        Ok((submissions, count))
    }

    /// Count a user's submissions
    pub async fn count_by_user(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM submissions WHERE user_id = $1"#)
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Count distinct problems a user has solved
    pub async fn count_solved_by_user(
        pool: &PgPool,
        user_id: &Uuid,
        accepted_status_id: i32,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT problem_id) FROM submissions
            WHERE user_id = $1 AND status_id = $2
            "#,
        )
        .bind(user_id)
        .bind(accepted_status_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Titles of the most recently solved problems
    pub async fn recent_solved_titles(
        pool: &PgPool,
        user_id: &Uuid,
        accepted_status_id: i32,
        limit: i64,
    ) -> AppResult<Vec<String>> {
        let titles: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT p.title
            FROM submissions s
            JOIN problems p ON p.id = s.problem_id
            WHERE s.user_id = $1 AND s.status_id = $2
            GROUP BY p.id, p.title
            ORDER BY MAX(s.submitted_at) DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(accepted_status_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(titles)
    }
}
