//! Problem handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::{error::AppResult, services::ProblemService, state::AppState};

use super::{
    request::ListProblemsQuery,
    response::{ProblemResponse, ProblemsListResponse, TestCaseResponse, TestCasesListResponse},
};

/// List all problems (paginated)
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (problems, total) = ProblemService::list_problems(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.difficulty.as_deref(),
        query.tag.as_deref(),
    )
    .await?;

    Ok(Json(ProblemsListResponse {
        problems: problems.into_iter().map(Into::into).collect(),
        total,
        page,
        per_page,
    }))
}

/// Get a specific problem
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::get_problem(state.db(), &id).await?;
    Ok(Json(problem.into()))
}

/// List a problem's public test cases
pub async fn list_test_cases(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TestCasesListResponse>> {
    let testcases = ProblemService::list_public_test_cases(state.db(), &id).await?;

    Ok(Json(TestCasesListResponse {
        testcases: testcases.into_iter().map(Into::into).collect(),
    }))
}
