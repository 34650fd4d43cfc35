//! Profile handler implementations

use axum::{extract::State, Json};

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::ProfileService,
    state::AppState,
};

use super::response::ProfileResponse;

/// Get the authenticated user's profile dashboard
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ProfileResponse>> {
    let profile = ProfileService::get_profile(state.db(), state.statuses(), &auth_user.id).await?;
    Ok(Json(profile))
}
