//! Profile handlers

mod handler;
pub mod response;

pub use handler::*;

use axum::{middleware, routing::get, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Profile routes (require an authenticated session)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_profile))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
