//! Verdict types shared by the judge client, dispatcher, and aggregator

use serde::{Deserialize, Serialize};

/// Status of a single test case or of a whole submission.
///
/// The derived ordering runs from best to worst: `Accepted` sorts lowest.
/// Display names match the `status_name` column of `submission_statuses`
/// and the `status.description` vocabulary of the judge service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusKind {
    Accepted,
    WrongAnswer,
    RuntimeError,
    CompileError,
    TimeLimitExceeded,
    /// Sentinel for a judge call that failed or never completed.
    JudgeError,
    Pending,
}

impl StatusKind {
    /// Human-readable name, as stored in `submission_statuses.status_name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::RuntimeError => "Runtime Error",
            Self::CompileError => "Compilation Error",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::JudgeError => "Judge Error",
            Self::Pending => "Pending",
        }
    }

    /// Map a judge service `status.description` to a status.
    ///
    /// The judge reports runtime errors with a signal suffix
    /// ("Runtime Error (SIGSEGV)" and friends), so runtime errors match on
    /// prefix. Queue states collapse to `Pending`; anything unrecognized is
    /// a judge-side anomaly and maps to `JudgeError`.
    pub fn from_description(description: &str) -> Self {
        match description {
            "Accepted" => Self::Accepted,
            "Wrong Answer" => Self::WrongAnswer,
            "Compilation Error" => Self::CompileError,
            "Time Limit Exceeded" => Self::TimeLimitExceeded,
            "In Queue" | "Processing" => Self::Pending,
            d if d.starts_with("Runtime Error") => Self::RuntimeError,
            d if d.starts_with("Internal Error") || d.starts_with("Exec Format Error") => {
                Self::JudgeError
            }
            _ => Self::JudgeError,
        }
    }

    /// Parse a stored status name back into a status.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Accepted" => Some(Self::Accepted),
            "Wrong Answer" => Some(Self::WrongAnswer),
            "Runtime Error" => Some(Self::RuntimeError),
            "Compilation Error" => Some(Self::CompileError),
            "Time Limit Exceeded" => Some(Self::TimeLimitExceeded),
            "Judge Error" => Some(Self::JudgeError),
            "Pending" => Some(Self::Pending),
            _ => None,
        }
    }

    /// Check if this status means the solution passed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Check if judging is complete (not queued or running).
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of evaluating one test case.
///
/// Immutable once produced; `test_case_index` ties it back to the input
/// test-case ordering regardless of completion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub test_case_index: usize,
    pub status: StatusKind,
    pub stdout: String,
    pub stderr: String,
    pub compile_output: String,
    pub time_ms: f64,
}

impl Verdict {
    /// Sentinel verdict for a judge call that failed or timed out.
    pub fn judge_error(test_case_index: usize, message: impl Into<String>) -> Self {
        Self {
            test_case_index,
            status: StatusKind::JudgeError,
            stdout: String::new(),
            stderr: message.into(),
            compile_output: String::new(),
            time_ms: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering_lower_is_better() {
        assert!(StatusKind::Accepted < StatusKind::WrongAnswer);
        assert!(StatusKind::WrongAnswer < StatusKind::RuntimeError);
        assert!(StatusKind::RuntimeError < StatusKind::CompileError);
        assert!(StatusKind::CompileError < StatusKind::TimeLimitExceeded);
        assert!(StatusKind::TimeLimitExceeded < StatusKind::Pending);
    }

    #[test]
    fn test_from_description() {
        assert_eq!(
            StatusKind::from_description("Accepted"),
            StatusKind::Accepted
        );
        assert_eq!(
            StatusKind::from_description("Wrong Answer"),
            StatusKind::WrongAnswer
        );
        assert_eq!(
            StatusKind::from_description("Runtime Error (SIGSEGV)"),
            StatusKind::RuntimeError
        );
        assert_eq!(
            StatusKind::from_description("In Queue"),
            StatusKind::Pending
        );
        assert_eq!(
            StatusKind::from_description("something unheard of"),
            StatusKind::JudgeError
        );
    }

    #[test]
    fn test_name_round_trip() {
        for kind in [
            StatusKind::Accepted,
            StatusKind::WrongAnswer,
            StatusKind::RuntimeError,
            StatusKind::CompileError,
            StatusKind::TimeLimitExceeded,
            StatusKind::JudgeError,
            StatusKind::Pending,
        ] {
            assert_eq!(StatusKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_judge_error_sentinel() {
        let v = Verdict::judge_error(3, "connection refused");
        assert_eq!(v.test_case_index, 3);
        assert_eq!(v.status, StatusKind::JudgeError);
        assert_eq!(v.stderr, "connection refused");
        assert_eq!(v.time_ms, 0.0);
    }
}
