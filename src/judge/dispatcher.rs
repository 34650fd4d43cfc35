//! Concurrent fan-out of test cases to the judge service
//!
//! Every test case becomes one judge call. Calls run concurrently behind a
//! configurable in-flight cap, and each completion writes its verdict into
//! a pre-sized slot addressed by test-case index, so the returned sequence
//! is index-aligned with the input regardless of completion order.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;

use super::client::{CaseResult, Judge, JudgeError};
use super::verdict::Verdict;

/// Evaluate a single case against the judge, pairing the result with its index.
///
/// Factored into a named `async fn` so its borrow of `case` is properly
/// lifetime-quantified for `buffer_unordered`.
async fn evaluate_case<J: Judge>(
    judge: Arc<J>,
    language_id: i32,
    source_code: &str,
    index: usize,
    case: &CaseInput,
) -> (usize, Result<CaseResult, JudgeError>) {
    let result = judge
        .evaluate(language_id, source_code, &case.input, &case.expected_output)
        .await;
    (index, result)
}

/// What to do when an individual judge call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole batch with the first error encountered.
    FailFast,
    /// Substitute a `JudgeError` sentinel verdict and keep going.
    Substitute,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail_fast" => Ok(Self::FailFast),
            "substitute" => Ok(Self::Substitute),
            other => Err(format!("unknown failure policy: {other}")),
        }
    }
}

/// Input/expected-output pair dispatched to the judge.
#[derive(Debug, Clone)]
pub struct CaseInput {
    pub input: String,
    pub expected_output: String,
}

/// Fans a submission's test cases out to the judge service.
pub struct Dispatcher<J> {
    judge: Arc<J>,
    max_in_flight: usize,
    batch_deadline: Duration,
}

impl<J: Judge> Dispatcher<J> {
    /// `max_in_flight` bounds concurrent judge calls; `batch_deadline`
    /// bounds the whole batch so a hung downstream call cannot stall a
    /// submission indefinitely.
    pub fn new(judge: Arc<J>, max_in_flight: usize, batch_deadline: Duration) -> Self {
        Self {
            judge,
            max_in_flight: max_in_flight.max(1),
            batch_deadline,
        }
    }

    /// Evaluate `source_code` against every test case.
    ///
    /// The returned vector is index-aligned with `testcases`: verdict `i`
    /// corresponds to test case `i`. An empty input yields an empty output.
    pub async fn run_all(
        &self,
        language_id: i32,
        source_code: &str,
        testcases: &[CaseInput],
        policy: FailurePolicy,
    ) -> Result<Vec<Verdict>, JudgeError> {
        if testcases.is_empty() {
            return Ok(Vec::new());
        }

        let mut slots: Vec<Option<Verdict>> = vec![None; testcases.len()];

        // Dropping this future on deadline expiry cancels in-flight calls.
        let collect = async {
            let calls: Vec<_> = testcases
                .iter()
                .enumerate()
                .map(|(index, case)| {
                    evaluate_case(Arc::clone(&self.judge), language_id, source_code, index, case)
                })
                .collect();
            let mut stream =
                futures::stream::iter(calls).buffer_unordered(self.max_in_flight);

            while let Some((index, result)) = stream.next().await {
                match result {
                    Ok(case) => {
                        slots[index] = Some(Verdict {
                            test_case_index: index,
                            status: case.status,
                            stdout: case.stdout,
                            stderr: case.stderr,
                            compile_output: case.compile_output,
                            time_ms: case.time_ms,
                        });
                    }
                    Err(err) => match policy {
                        FailurePolicy::FailFast => return Err(err),
                        FailurePolicy::Substitute => {
                            tracing::warn!(
                                test_case_index = index,
                                error = %err,
                                "Judge call failed, substituting sentinel verdict"
                            );
                            slots[index] = Some(Verdict::judge_error(index, err.to_string()));
                        }
                    },
                }
            }

            Ok(())
        };

        match tokio::time::timeout(self.batch_deadline, collect).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => return Err(err),
            Err(_elapsed) => {
                if policy == FailurePolicy::FailFast {
                    return Err(JudgeError::Timeout(self.batch_deadline));
                }
                tracing::warn!(
                    deadline = ?self.batch_deadline,
                    "Batch deadline exceeded, substituting for unfinished cases"
                );
            }
        }

        Ok(slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| Verdict::judge_error(index, "batch deadline exceeded"))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::judge::client::CaseResult;
    use crate::judge::verdict::StatusKind;

    /// Scripted judge: `stdin` is a sleep duration in ms, and an
    /// `expected_output` of "fail" makes the call error out.
    #[derive(Default)]
    struct StubJudge {
        in_flight: AtomicUsize,
        max_seen: AtomicUsize,
    }

    #[async_trait]
    impl Judge for StubJudge {
        async fn evaluate(
            &self,
            _language_id: i32,
            _source_code: &str,
            stdin: &str,
            expected_output: &str,
        ) -> Result<CaseResult, JudgeError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_seen.fetch_max(now, Ordering::SeqCst);

            let sleep_ms: u64 = stdin.parse().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(sleep_ms)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if expected_output == "fail" {
                return Err(JudgeError::Unavailable("connection refused".to_string()));
            }

            Ok(CaseResult {
                status: StatusKind::Accepted,
                stdout: stdin.to_string(),
                stderr: String::new(),
                compile_output: String::new(),
                time_ms: sleep_ms as f64,
            })
        }
    }

    fn case(input: &str) -> CaseInput {
        CaseInput {
            input: input.to_string(),
            expected_output: "ok".to_string(),
        }
    }

    fn dispatcher(judge: Arc<StubJudge>, cap: usize) -> Dispatcher<StubJudge> {
        Dispatcher::new(judge, cap, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_verdicts_are_index_aligned_despite_completion_order() {
        // First case is the slowest, so it completes last.
        let cases = vec![case("50"), case("20"), case("1")];
        let d = dispatcher(Arc::new(StubJudge::default()), 8);

        let verdicts = d
            .run_all(71, "print()", &cases, FailurePolicy::FailFast)
            .await
            .unwrap();

        assert_eq!(verdicts.len(), 3);
        for (i, v) in verdicts.iter().enumerate() {
            assert_eq!(v.test_case_index, i);
            assert_eq!(v.stdout, cases[i].input);
        }
    }

    #[tokio::test]
    async fn test_empty_input_returns_empty_output() {
        let d = dispatcher(Arc::new(StubJudge::default()), 4);
        let verdicts = d
            .run_all(71, "print()", &[], FailurePolicy::FailFast)
            .await
            .unwrap();
        assert!(verdicts.is_empty());
    }

    #[tokio::test]
    async fn test_concurrency_cap_is_respected() {
        let judge = Arc::new(StubJudge::default());
        let cases: Vec<CaseInput> = (0..8).map(|_| case("15")).collect();
        let d = dispatcher(Arc::clone(&judge), 2);

        d.run_all(71, "print()", &cases, FailurePolicy::FailFast)
            .await
            .unwrap();

        assert!(judge.max_seen.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_substitute_policy_yields_sentinel_at_failed_index() {
        let mut cases = vec![case("1"), case("1"), case("1")];
        cases[1].expected_output = "fail".to_string();

        let d = dispatcher(Arc::new(StubJudge::default()), 4);
        let verdicts = d
            .run_all(71, "print()", &cases, FailurePolicy::Substitute)
            .await
            .unwrap();

        assert_eq!(verdicts[0].status, StatusKind::Accepted);
        assert_eq!(verdicts[1].status, StatusKind::JudgeError);
        assert_eq!(verdicts[1].test_case_index, 1);
        assert_eq!(verdicts[2].status, StatusKind::Accepted);
    }

    #[tokio::test]
    async fn test_fail_fast_policy_aborts_batch() {
        let mut cases = vec![case("1"), case("1")];
        cases[0].expected_output = "fail".to_string();

        let d = dispatcher(Arc::new(StubJudge::default()), 4);
        let err = d
            .run_all(71, "print()", &cases, FailurePolicy::FailFast)
            .await
            .unwrap_err();

        assert!(matches!(err, JudgeError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_deadline_substitutes_unfinished_cases() {
        let cases = vec![case("1"), case("10000")];
        let d = Dispatcher::new(
            Arc::new(StubJudge::default()),
            4,
            Duration::from_millis(200),
        );

        let verdicts = d
            .run_all(71, "print()", &cases, FailurePolicy::Substitute)
            .await
            .unwrap();

        assert_eq!(verdicts[0].status, StatusKind::Accepted);
        assert_eq!(verdicts[1].status, StatusKind::JudgeError);
    }

    #[tokio::test]
    async fn test_deadline_fails_fast_batch() {
        let cases = vec![case("10000")];
        let d = Dispatcher::new(
            Arc::new(StubJudge::default()),
            4,
            Duration::from_millis(100),
        );

        let err = d
            .run_all(71, "print()", &cases, FailurePolicy::FailFast)
            .await
            .unwrap_err();

        assert!(matches!(err, JudgeError::Timeout(_)));
    }
}
