//! Comment response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Comment;

/// Comment response
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            content: c.content,
            created_at: c.created_at,
        }
    }
}

/// Comment list response
#[derive(Debug, Serialize)]
pub struct CommentsListResponse {
    pub comments: Vec<CommentResponse>,
}
