//! Submission read-path service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::SubmissionRepository,
    error::{AppError, AppResult},
    handlers::submissions::response::SubmissionResponse,
    models::Submission,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Get a submission, visible only to its owner
    pub async fn get_submission(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
    ) -> AppResult<SubmissionResponse> {
        let submission = SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        if submission.user_id != *requester_id {
            return Err(AppError::Forbidden(
                "Cannot view other users' submissions".to_string(),
            ));
        }

        Self::to_submission_response(pool, submission).await
    }

    /// List the requester's submissions
    pub async fn list_submissions(
        pool: &PgPool,
        requester_id: &Uuid,
        problem_id: Option<&Uuid>,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<SubmissionResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (submissions, total) =
            SubmissionRepository::list_by_user(pool, requester_id, problem_id, offset, limit)
                .await?;

        let responses = futures::future::try_join_all(
            submissions
                .into_iter()
                .map(|s| Self::to_submission_response(pool, s)),
        )
        .await?;

        Ok((responses, total))
    }

    // Helper function
    async fn to_submission_response(
        pool: &PgPool,
        submission: Submission,
    ) -> AppResult<SubmissionResponse> {
        let status_name: Option<String> =
            sqlx::query_scalar(r#"SELECT status_name FROM submission_statuses WHERE id = $1"#)
                .bind(submission.status_id)
                .fetch_optional(pool)
                .await?;

        let problem_title: Option<String> =
            sqlx::query_scalar(r#"SELECT title FROM problems WHERE id = $1"#)
                .bind(submission.problem_id)
                .fetch_optional(pool)
                .await?;

        Ok(SubmissionResponse {
            id: submission.id,
            problem_id: submission.problem_id,
            problem_title: problem_title.unwrap_or_default(),
            language_id: submission.language_id,
            status: status_name.unwrap_or_default(),
            execution_time_ms: submission.execution_time_ms,
            submitted_at: submission.submitted_at,
        })
    }
}
