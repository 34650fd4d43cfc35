//! Comment handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::CommentService,
    state::AppState,
};

use super::{
    request::CreateCommentRequest,
    response::{CommentResponse, CommentsListResponse},
};

/// List a problem's comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(problem_id): Path<Uuid>,
) -> AppResult<Json<CommentsListResponse>> {
    let comments = CommentService::list_comments(state.db(), &problem_id).await?;

    Ok(Json(CommentsListResponse {
        comments: comments.into_iter().map(Into::into).collect(),
    }))
}

/// Post a comment on a problem
pub async fn create_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(problem_id): Path<Uuid>,
    Json(payload): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    payload.validate()?;

    let comment =
        CommentService::create_comment(state.db(), &problem_id, &auth_user.id, &payload.content)
            .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}
