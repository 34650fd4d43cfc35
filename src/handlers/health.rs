//! Health check handler

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{db, error::AppResult, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let database = match db::test_connection(state.db()).await {
        Ok(()) => "up",
        Err(_) => "down",
    };

    Ok(Json(HealthResponse {
        status: "ok",
        database,
    }))
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
