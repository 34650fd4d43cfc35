//! Reduction of per-case verdicts into one submission-level outcome

use super::verdict::{StatusKind, Verdict};

/// Reduce an ordered verdict sequence to `(status, execution_time_ms)`.
///
/// The submission status is the status of the *first* verdict that is not
/// `Accepted` — the earliest failing test case determines the reported
/// status even if a later case fails differently. The execution time is the
/// maximum `time_ms` across all verdicts regardless of pass/fail, so a run
/// that fails on case 3 still reports the slowest case's time.
///
/// An empty sequence reduces to `(Accepted, 0.0)`; callers that consider a
/// zero-case evaluation invalid must reject it before dispatch.
pub fn aggregate(verdicts: &[Verdict]) -> (StatusKind, f64) {
    let status = verdicts
        .iter()
        .map(|v| v.status)
        .find(|s| !s.is_accepted())
        .unwrap_or(StatusKind::Accepted);

    let execution_time_ms = verdicts.iter().map(|v| v.time_ms).fold(0.0, f64::max);

    (status, execution_time_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(index: usize, status: StatusKind, time_ms: f64) -> Verdict {
        Verdict {
            test_case_index: index,
            status,
            stdout: String::new(),
            stderr: String::new(),
            compile_output: String::new(),
            time_ms,
        }
    }

    #[test]
    fn test_all_pass() {
        let verdicts = vec![
            verdict(0, StatusKind::Accepted, 0.05),
            verdict(1, StatusKind::Accepted, 0.07),
        ];
        assert_eq!(aggregate(&verdicts), (StatusKind::Accepted, 0.07));
    }

    #[test]
    fn test_first_failure_wins_over_worse_later_failure() {
        let verdicts = vec![
            verdict(0, StatusKind::Accepted, 0.01),
            verdict(1, StatusKind::WrongAnswer, 0.02),
            verdict(2, StatusKind::RuntimeError, 0.03),
        ];
        let (status, _) = aggregate(&verdicts);
        assert_eq!(status, StatusKind::WrongAnswer);
    }

    #[test]
    fn test_max_time_regardless_of_outcome() {
        let verdicts = vec![
            verdict(0, StatusKind::Accepted, 1.2),
            verdict(1, StatusKind::WrongAnswer, 3.4),
            verdict(2, StatusKind::Accepted, 0.1),
        ];
        let (_, time) = aggregate(&verdicts);
        assert_eq!(time, 3.4);
    }

    #[test]
    fn test_empty_aggregates_to_accepted_zero() {
        assert_eq!(aggregate(&[]), (StatusKind::Accepted, 0.0));
    }

    #[test]
    fn test_failure_on_first_case_keeps_slowest_time() {
        let verdicts = vec![
            verdict(0, StatusKind::WrongAnswer, 0.04),
            verdict(1, StatusKind::Accepted, 0.09),
        ];
        assert_eq!(aggregate(&verdicts), (StatusKind::WrongAnswer, 0.09));
    }
}
