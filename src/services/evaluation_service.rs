//! Submission evaluation lifecycle
//!
//! Owns the `Pending -> Finalized` transition of a persisted submission:
//! the pending row is inserted before any judge call, every test case is
//! dispatched, the verdicts are aggregated, and the final status and
//! timing are written back exactly once. Failures inside the pipeline are
//! captured as data or returned as errors; either way the submission is
//! left `Pending` or `Finalized`, never in between.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::EvaluationConfig,
    constants::statuses,
    db::repositories::{StatusRegistry, SubmissionRepository, TestCaseRepository},
    error::{AppError, AppResult},
    judge::{aggregate, CaseInput, Dispatcher, FailurePolicy, Judge, StatusKind, Verdict},
    models::TestCase,
};

/// Ordered test cases for a problem.
#[async_trait]
pub trait TestCaseProvider: Send + Sync {
    async fn list_test_cases(
        &self,
        problem_id: &Uuid,
        include_hidden: bool,
    ) -> AppResult<Vec<TestCase>>;
}

/// The persisted submission record.
///
/// `finalize` must be idempotent: repeating a call with the same arguments
/// leaves the record identical, and a finalized submission is never
/// re-entered.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert_pending(
        &self,
        user_id: &Uuid,
        problem_id: &Uuid,
        source_code: &str,
        language_id: i32,
    ) -> AppResult<Uuid>;

    async fn finalize(
        &self,
        submission_id: &Uuid,
        status_id: i32,
        execution_time_ms: f64,
    ) -> AppResult<()>;
}

/// Production provider backed by the `test_cases` table.
pub struct PgTestCaseProvider {
    pool: PgPool,
}

impl PgTestCaseProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestCaseProvider for PgTestCaseProvider {
    async fn list_test_cases(
        &self,
        problem_id: &Uuid,
        include_hidden: bool,
    ) -> AppResult<Vec<TestCase>> {
        TestCaseRepository::list_for_problem(&self.pool, problem_id, include_hidden).await
    }
}

/// Production store backed by the `submissions` table.
pub struct PgSubmissionStore {
    pool: PgPool,
    pending_status_id: i32,
}

impl PgSubmissionStore {
    /// The pending status identifier is resolved once at construction.
    pub fn new(pool: PgPool, registry: &StatusRegistry) -> AppResult<Self> {
        Ok(Self {
            pool,
            pending_status_id: registry.resolve(StatusKind::Pending)?,
        })
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert_pending(
        &self,
        user_id: &Uuid,
        problem_id: &Uuid,
        source_code: &str,
        language_id: i32,
    ) -> AppResult<Uuid> {
        let submission = SubmissionRepository::create_pending(
            &self.pool,
            user_id,
            problem_id,
            source_code,
            language_id,
            self.pending_status_id,
        )
        .await?;

        Ok(submission.id)
    }

    async fn finalize(
        &self,
        submission_id: &Uuid,
        status_id: i32,
        execution_time_ms: f64,
    ) -> AppResult<()> {
        SubmissionRepository::finalize(
            &self.pool,
            submission_id,
            status_id,
            execution_time_ms,
            self.pending_status_id,
        )
        .await
    }
}

/// Outcome of the submit path.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub submission_id: Uuid,
    pub status: StatusKind,
    pub execution_time_ms: f64,
}

/// Drives a submission from creation to its final status.
pub struct EvaluationService<J> {
    dispatcher: Dispatcher<J>,
    statuses: StatusRegistry,
    submit_policy: FailurePolicy,
    run_policy: FailurePolicy,
}

impl<J: Judge> EvaluationService<J> {
    pub fn new(judge: Arc<J>, statuses: StatusRegistry, config: &EvaluationConfig) -> Self {
        let dispatcher = Dispatcher::new(
            judge,
            config.max_concurrent_calls,
            Duration::from_secs(config.batch_deadline_secs),
        );

        Self {
            dispatcher,
            statuses,
            submit_policy: config.submit_failure_policy,
            run_policy: config.run_failure_policy,
        }
    }

    /// Submit path: evaluate against the problem's full test-case set
    /// (hidden included) and persist the outcome.
    ///
    /// A problem with zero test cases is rejected before anything is
    /// persisted — it must not trivially produce an accepted submission.
    pub async fn submit<S, T>(
        &self,
        store: &S,
        provider: &T,
        user_id: &Uuid,
        problem_id: &Uuid,
        language_id: i32,
        source_code: &str,
    ) -> AppResult<SubmitOutcome>
    where
        S: SubmissionStore,
        T: TestCaseProvider,
    {
        let test_cases = provider.list_test_cases(problem_id, true).await?;
        if test_cases.is_empty() {
            return Err(AppError::Validation(
                "Problem has no test cases".to_string(),
            ));
        }

        // The pending row goes in before any judge call, so a crash
        // mid-evaluation leaves a durable, queryable record.
        let submission_id = store
            .insert_pending(user_id, problem_id, source_code, language_id)
            .await?;

        tracing::info!(
            %submission_id,
            %problem_id,
            cases = test_cases.len(),
            "Submission created, dispatching to judge"
        );

        let inputs = case_inputs(&test_cases);
        let verdicts = self
            .dispatcher
            .run_all(language_id, source_code, &inputs, self.submit_policy)
            .await?;

        let (status, execution_time_ms) = aggregate(&verdicts);
        let status_id = self.statuses.resolve(status)?;

        store
            .finalize(&submission_id, status_id, execution_time_ms)
            .await?;

        tracing::info!(
            %submission_id,
            status = %status,
            execution_time_ms,
            "Submission finalized"
        );

        Ok(SubmitOutcome {
            submission_id,
            status,
            execution_time_ms,
        })
    }

    /// Run path: ephemeral evaluation, nothing persisted. Surfaces raw
    /// per-case verdicts to the caller.
    pub async fn run(
        &self,
        language_id: i32,
        source_code: &str,
        inputs: &[CaseInput],
    ) -> AppResult<Vec<Verdict>> {
        let verdicts = self
            .dispatcher
            .run_all(language_id, source_code, inputs, self.run_policy)
            .await?;

        Ok(verdicts)
    }
}

/// Project stored test cases onto the dispatcher's input shape.
pub fn case_inputs(test_cases: &[TestCase]) -> Vec<CaseInput> {
    test_cases
        .iter()
        .map(|tc| CaseInput {
            input: tc.input.clone(),
            expected_output: tc.expected_output.clone(),
        })
        .collect()
}

/// Seed pairs matching the `submission_statuses` migration.
pub fn default_status_pairs() -> [(&'static str, i32); 7] {
    [
        (statuses::PENDING, 1),
        (statuses::ACCEPTED, 2),
        (statuses::WRONG_ANSWER, 3),
        (statuses::RUNTIME_ERROR, 4),
        (statuses::COMPILATION_ERROR, 5),
        (statuses::TIME_LIMIT_EXCEEDED, 6),
        (statuses::JUDGE_ERROR, 7),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::judge::{CaseResult, JudgeError};

    mock! {
        pub JudgeStub {}

        #[async_trait]
        impl Judge for JudgeStub {
            async fn evaluate(
                &self,
                language_id: i32,
                source_code: &str,
                stdin: &str,
                expected_output: &str,
            ) -> Result<CaseResult, JudgeError>;
        }
    }

    const PENDING_ID: i32 = 1;

    #[derive(Debug, Clone, PartialEq)]
    struct StoredSubmission {
        status_id: i32,
        execution_time_ms: Option<f64>,
    }

    /// In-memory store mirroring the Pg store's pending-guarded finalize.
    #[derive(Default)]
    struct FakeStore {
        rows: Mutex<HashMap<Uuid, StoredSubmission>>,
    }

    impl FakeStore {
        fn get(&self, id: &Uuid) -> Option<StoredSubmission> {
            self.rows.lock().unwrap().get(id).cloned()
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SubmissionStore for FakeStore {
        async fn insert_pending(
            &self,
            _user_id: &Uuid,
            _problem_id: &Uuid,
            _source_code: &str,
            _language_id: i32,
        ) -> AppResult<Uuid> {
            let id = Uuid::new_v4();
            self.rows.lock().unwrap().insert(
                id,
                StoredSubmission {
                    status_id: PENDING_ID,
                    execution_time_ms: None,
                },
            );
            Ok(id)
        }

        async fn finalize(
            &self,
            submission_id: &Uuid,
            status_id: i32,
            execution_time_ms: f64,
        ) -> AppResult<()> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(row) = rows.get_mut(submission_id) {
                if row.status_id == PENDING_ID {
                    row.status_id = status_id;
                    row.execution_time_ms = Some(execution_time_ms);
                }
            }
            Ok(())
        }
    }

    struct FakeProvider {
        cases: Vec<TestCase>,
    }

    #[async_trait]
    impl TestCaseProvider for FakeProvider {
        async fn list_test_cases(
            &self,
            _problem_id: &Uuid,
            include_hidden: bool,
        ) -> AppResult<Vec<TestCase>> {
            Ok(self
                .cases
                .iter()
                .filter(|tc| include_hidden || !tc.is_hidden)
                .cloned()
                .collect())
        }
    }

    fn test_case(input: &str, expected: &str, position: i32) -> TestCase {
        TestCase {
            id: Uuid::new_v4(),
            problem_id: Uuid::new_v4(),
            input: input.to_string(),
            expected_output: expected.to_string(),
            is_hidden: false,
            position,
            created_at: Utc::now(),
        }
    }

    fn accepted(time_ms: f64) -> CaseResult {
        CaseResult {
            status: StatusKind::Accepted,
            stdout: String::new(),
            stderr: String::new(),
            compile_output: String::new(),
            time_ms,
        }
    }

    fn wrong_answer(time_ms: f64) -> CaseResult {
        CaseResult {
            status: StatusKind::WrongAnswer,
            stdout: String::new(),
            stderr: String::new(),
            compile_output: String::new(),
            time_ms,
        }
    }

    fn config() -> EvaluationConfig {
        EvaluationConfig {
            max_concurrent_calls: 4,
            batch_deadline_secs: 5,
            submit_failure_policy: FailurePolicy::Substitute,
            run_failure_policy: FailurePolicy::FailFast,
        }
    }

    fn registry() -> StatusRegistry {
        StatusRegistry::from_pairs(default_status_pairs())
    }

    fn service(judge: MockJudgeStub) -> EvaluationService<MockJudgeStub> {
        EvaluationService::new(Arc::new(judge), registry(), &config())
    }

    #[tokio::test]
    async fn test_submit_all_accepted() {
        let mut judge = MockJudgeStub::new();
        judge
            .expect_evaluate()
            .returning(|_, _, stdin, _| {
                Ok(accepted(if stdin == "1 2" { 0.05 } else { 0.07 }))
            });

        let store = FakeStore::default();
        let provider = FakeProvider {
            cases: vec![test_case("1 2", "3", 0), test_case("5 5", "10", 1)],
        };

        let outcome = service(judge)
            .submit(
                &store,
                &provider,
                &Uuid::new_v4(),
                &Uuid::new_v4(),
                71,
                "print(sum(map(int, input().split())))",
            )
            .await
            .unwrap();

        assert_eq!(outcome.status, StatusKind::Accepted);
        assert_eq!(outcome.execution_time_ms, 0.07);

        let row = store.get(&outcome.submission_id).unwrap();
        assert_eq!(row.status_id, 2);
        assert_eq!(row.execution_time_ms, Some(0.07));
    }

    #[tokio::test]
    async fn test_submit_wrong_answer_on_first_case() {
        let mut judge = MockJudgeStub::new();
        judge.expect_evaluate().returning(|_, _, stdin, _| {
            if stdin == "1 2" {
                Ok(wrong_answer(0.04))
            } else {
                Ok(accepted(0.09))
            }
        });

        let store = FakeStore::default();
        let provider = FakeProvider {
            cases: vec![test_case("1 2", "3", 0), test_case("5 5", "10", 1)],
        };

        let outcome = service(judge)
            .submit(
                &store,
                &provider,
                &Uuid::new_v4(),
                &Uuid::new_v4(),
                71,
                "print(0)",
            )
            .await
            .unwrap();

        assert_eq!(outcome.status, StatusKind::WrongAnswer);
        assert_eq!(outcome.execution_time_ms, 0.09);

        let row = store.get(&outcome.submission_id).unwrap();
        assert_eq!(row.status_id, 3);
    }

    #[tokio::test]
    async fn test_submit_rejects_problem_without_test_cases() {
        let judge = MockJudgeStub::new();
        let store = FakeStore::default();
        let provider = FakeProvider { cases: vec![] };

        let err = service(judge)
            .submit(
                &store,
                &provider,
                &Uuid::new_v4(),
                &Uuid::new_v4(),
                71,
                "print(0)",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        // Nothing was persisted before the rejection.
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_judge_failure_substitutes_and_still_finalizes() {
        let mut judge = MockJudgeStub::new();
        judge.expect_evaluate().returning(|_, _, stdin, _| {
            if stdin == "1 2" {
                Err(JudgeError::Unavailable("connection refused".to_string()))
            } else {
                Ok(accepted(0.09))
            }
        });

        let store = FakeStore::default();
        let provider = FakeProvider {
            cases: vec![test_case("1 2", "3", 0), test_case("5 5", "10", 1)],
        };

        let outcome = service(judge)
            .submit(
                &store,
                &provider,
                &Uuid::new_v4(),
                &Uuid::new_v4(),
                71,
                "print(0)",
            )
            .await
            .unwrap();

        // The persisted submission reached a terminal status despite the
        // failed judge call.
        assert_eq!(outcome.status, StatusKind::JudgeError);
        let row = store.get(&outcome.submission_id).unwrap();
        assert_eq!(row.status_id, 7);
    }

    #[tokio::test]
    async fn test_unknown_status_leaves_submission_pending() {
        let mut judge = MockJudgeStub::new();
        judge
            .expect_evaluate()
            .returning(|_, _, _, _| Ok(wrong_answer(0.01)));

        let store = FakeStore::default();
        let provider = FakeProvider {
            cases: vec![test_case("1 2", "3", 0)],
        };

        // Registry without a "Wrong Answer" row.
        let incomplete = StatusRegistry::from_pairs([("Pending", 1), ("Accepted", 2)]);
        let svc = EvaluationService::new(Arc::new(judge), incomplete, &config());

        let err = svc
            .submit(
                &store,
                &provider,
                &Uuid::new_v4(),
                &Uuid::new_v4(),
                71,
                "print(0)",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UnknownStatus(_)));

        // The record exists and is still pending.
        assert_eq!(store.len(), 1);
        let row = store.rows.lock().unwrap().values().next().cloned().unwrap();
        assert_eq!(row.status_id, PENDING_ID);
        assert_eq!(row.execution_time_ms, None);
    }

    #[tokio::test]
    async fn test_finalize_is_idempotent() {
        let store = FakeStore::default();
        let id = store
            .insert_pending(&Uuid::new_v4(), &Uuid::new_v4(), "print(0)", 71)
            .await
            .unwrap();

        store.finalize(&id, 2, 0.07).await.unwrap();
        let first = store.get(&id).unwrap();

        store.finalize(&id, 2, 0.07).await.unwrap();
        let second = store.get(&id).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_finalized_submission_is_never_reentered() {
        let store = FakeStore::default();
        let id = store
            .insert_pending(&Uuid::new_v4(), &Uuid::new_v4(), "print(0)", 71)
            .await
            .unwrap();

        store.finalize(&id, 2, 0.07).await.unwrap();
        store.finalize(&id, 3, 9.99).await.unwrap();

        let row = store.get(&id).unwrap();
        assert_eq!(row.status_id, 2);
        assert_eq!(row.execution_time_ms, Some(0.07));
    }

    #[tokio::test]
    async fn test_run_path_surfaces_raw_verdicts() {
        let mut judge = MockJudgeStub::new();
        judge.expect_evaluate().returning(|_, _, stdin, _| {
            Ok(CaseResult {
                status: StatusKind::Accepted,
                stdout: stdin.to_string(),
                stderr: String::new(),
                compile_output: String::new(),
                time_ms: 0.01,
            })
        });

        let inputs = vec![
            CaseInput {
                input: "1 2".to_string(),
                expected_output: "3".to_string(),
            },
            CaseInput {
                input: "5 5".to_string(),
                expected_output: "10".to_string(),
            },
        ];

        let verdicts = service(judge).run(71, "print(0)", &inputs).await.unwrap();

        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].stdout, "1 2");
        assert_eq!(verdicts[1].stdout, "5 5");
        assert_eq!(verdicts[1].test_case_index, 1);
    }

    #[tokio::test]
    async fn test_run_path_fails_fast_on_judge_error() {
        let mut judge = MockJudgeStub::new();
        judge.expect_evaluate().returning(|_, _, _, _| {
            Err(JudgeError::Unavailable("connection refused".to_string()))
        });

        let inputs = vec![CaseInput {
            input: "1 2".to_string(),
            expected_output: "3".to_string(),
        }];

        let err = service(judge)
            .run(71, "print(0)", &inputs)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Judge(JudgeError::Unavailable(_))));
    }
}
