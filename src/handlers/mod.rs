//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod comments;
pub mod health;
pub mod problems;
pub mod profile;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/problems", problems::routes())
        .nest("/submissions", submissions::routes(state.clone()))
        .nest("/profile", profile::routes(state))
}
