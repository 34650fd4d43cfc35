//! Profile dashboard service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{StatusRegistry, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::profile::response::ProfileResponse,
    judge::StatusKind,
};

/// Number of recently solved problems shown on the dashboard
const RECENT_SOLVED_LIMIT: i64 = 10;

/// Profile service for business logic
pub struct ProfileService;

impl ProfileService {
    /// Assemble the profile dashboard for a user
    pub async fn get_profile(
        pool: &PgPool,
        statuses: &StatusRegistry,
        user_id: &Uuid,
    ) -> AppResult<ProfileResponse> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let accepted_id = statuses.resolve(StatusKind::Accepted)?;

        let total_submissions = SubmissionRepository::count_by_user(pool, user_id).await?;
        let solved_count =
            SubmissionRepository::count_solved_by_user(pool, user_id, accepted_id).await?;
        let recent_solved =
            SubmissionRepository::recent_solved_titles(pool, user_id, accepted_id, RECENT_SOLVED_LIMIT)
                .await?;

        Ok(ProfileResponse {
            username: user.username,
            email: user.email,
            total_submissions,
            solved_count,
            recent_solved,
        })
    }
}
