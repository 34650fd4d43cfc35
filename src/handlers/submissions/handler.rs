//! Submission handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_RUN_TEST_CASES,
    error::{AppError, AppResult},
    judge::CaseInput,
    middleware::auth::AuthenticatedUser,
    services::{ProblemService, SubmissionService},
    state::AppState,
    utils::validation::validate_language_id,
};

use super::{
    request::{CreateSubmissionRequest, ListSubmissionsQuery, RunRequest},
    response::{
        CreateSubmissionResponse, RunResponse, SubmissionResponse, SubmissionsListResponse,
    },
};

/// Submit path: evaluate against the problem's full test-case set and
/// persist the outcome.
pub async fn create_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<CreateSubmissionResponse>)> {
    payload.validate()?;
    validate_language_id(payload.language_id).map_err(|e| AppError::Validation(e.to_string()))?;

    // No pending row without a backing problem.
    ProblemService::get_problem(state.db(), &payload.problem_id).await?;

    let outcome = state
        .evaluation()
        .submit(
            state.submission_store(),
            state.test_case_provider(),
            &auth_user.id,
            &payload.problem_id,
            payload.language_id,
            &payload.source_code,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSubmissionResponse {
            submission_id: outcome.submission_id,
            status: outcome.status.as_str().to_string(),
            execution_time_ms: outcome.execution_time_ms,
        }),
    ))
}

/// Run path: ephemeral evaluation against inline test cases, or the
/// problem's public cases when none are supplied. Nothing is persisted.
pub async fn run_submission(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Json(payload): Json<RunRequest>,
) -> AppResult<Json<RunResponse>> {
    payload.validate()?;
    validate_language_id(payload.language_id).map_err(|e| AppError::Validation(e.to_string()))?;

    let inputs: Vec<CaseInput> = match payload.testcases {
        Some(cases) if !cases.is_empty() => {
            if cases.len() > MAX_RUN_TEST_CASES {
                return Err(AppError::Validation(format!(
                    "At most {} test cases per run",
                    MAX_RUN_TEST_CASES
                )));
            }
            cases
                .into_iter()
                .map(|tc| CaseInput {
                    input: tc.input,
                    expected_output: tc.expected_output,
                })
                .collect()
        }
        _ => {
            let public = ProblemService::list_public_test_cases(state.db(), &payload.problem_id)
                .await?;
            public
                .into_iter()
                .map(|tc| CaseInput {
                    input: tc.input,
                    expected_output: tc.expected_output,
                })
                .collect()
        }
    };

    let verdicts = state
        .evaluation()
        .run(payload.language_id, &payload.source_code, &inputs)
        .await?;

    Ok(Json(RunResponse {
        results: verdicts.into_iter().map(Into::into).collect(),
    }))
}

/// List the authenticated user's submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListSubmissionsQuery>,
) -> AppResult<Json<SubmissionsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (submissions, total) = SubmissionService::list_submissions(
        state.db(),
        &auth_user.id,
        query.problem_id.as_ref(),
        page,
        per_page,
    )
    .await?;

    Ok(Json(SubmissionsListResponse {
        submissions,
        total,
        page,
        per_page,
    }))
}

/// Get a specific submission (owner-only)
pub async fn get_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::get_submission(state.db(), &id, &auth_user.id).await?;
    Ok(Json(submission))
}
