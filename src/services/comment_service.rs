//! Discussion comment service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{CommentRepository, ProblemRepository},
    error::{AppError, AppResult},
    models::Comment,
};

/// Comment service for business logic
pub struct CommentService;

impl CommentService {
    /// List a problem's comments, newest first
    pub async fn list_comments(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<Comment>> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        CommentRepository::list_for_problem(pool, problem_id).await
    }

    /// Post a comment on a problem
    pub async fn create_comment(
        pool: &PgPool,
        problem_id: &Uuid,
        user_id: &Uuid,
        content: &str,
    ) -> AppResult<Comment> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        CommentRepository::create(pool, problem_id, user_id, content).await
    }
}
