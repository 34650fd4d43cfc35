//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Problem};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Check whether a problem exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM problems WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// List problems with pagination and filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        difficulty: Option<&str>,
        tag: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE
                ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
                AND ($2::text IS NULL OR difficulty = $2)
                AND ($3::text IS NULL OR $3 = ANY(tags))
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(search)
        .bind(difficulty)
        .bind(tag)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM problems
            WHERE
                ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
                AND ($2::text IS NULL OR difficulty = $2)
                AND ($3::text IS NULL OR $3 = ANY(tags))
            "#,
        )
        .bind(search)
        .bind(difficulty)
        .bind(tag)
        .fetch_one(pool)
        .await?;

        Ok((problems, count))
    }
}
