//! Discussion comment repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Comment};

/// Repository for comment database operations
pub struct CommentRepository;

impl CommentRepository {
    /// Create a comment on a problem
    pub async fn create(
        pool: &PgPool,
        problem_id: &Uuid,
        user_id: &Uuid,
        content: &str,
    ) -> AppResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (problem_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(comment)
    }

    /// List a problem's comments, newest first
    pub async fn list_for_problem(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT * FROM comments
            WHERE problem_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(comments)
    }
}
