//! Problem handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

use super::comments;

/// Problem routes (public; discussion nested per problem)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_problems))
        .route("/{id}", get(handler::get_problem))
        .route("/{id}/testcases", get(handler::list_test_cases))
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
}
