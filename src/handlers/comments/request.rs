//! Comment request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create comment request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 4096))]
    pub content: String,
}
