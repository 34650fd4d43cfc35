//! Submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Submission routes (all require an authenticated session)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handler::create_submission).get(handler::list_submissions),
        )
        .route("/run", post(handler::run_submission))
        .route("/{id}", get(handler::get_submission))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
