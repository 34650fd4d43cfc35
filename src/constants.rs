//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// EVALUATION DEFAULTS
// =============================================================================

/// Default maximum concurrent in-flight judge calls per submission
pub const DEFAULT_MAX_CONCURRENT_CALLS: usize = 8;

/// Default per-request judge timeout in seconds
pub const DEFAULT_JUDGE_TIMEOUT_SECONDS: u64 = 15;

/// Default overall deadline for one evaluation batch in seconds
pub const DEFAULT_BATCH_DEADLINE_SECONDS: u64 = 60;

/// Default failure policy for the submit path
pub const DEFAULT_SUBMIT_FAILURE_POLICY: &str = "substitute";

/// Default failure policy for the run path
pub const DEFAULT_RUN_FAILURE_POLICY: &str = "fail_fast";

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Status names, matching `submission_statuses.status_name` and the judge
/// service's status vocabulary.
pub mod statuses {
    pub const PENDING: &str = "Pending";
    pub const ACCEPTED: &str = "Accepted";
    pub const WRONG_ANSWER: &str = "Wrong Answer";
    pub const RUNTIME_ERROR: &str = "Runtime Error";
    pub const COMPILATION_ERROR: &str = "Compilation Error";
    pub const TIME_LIMIT_EXCEEDED: &str = "Time Limit Exceeded";
    pub const JUDGE_ERROR: &str = "Judge Error";

    /// Every status a submission row may carry
    pub const ALL: &[&str] = &[
        PENDING,
        ACCEPTED,
        WRONG_ANSWER,
        RUNTIME_ERROR,
        COMPILATION_ERROR,
        TIME_LIMIT_EXCEEDED,
        JUDGE_ERROR,
    ];
}

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Judge service language identifiers
pub mod language_ids {
    pub const C: i32 = 50;
    pub const CPP: i32 = 54;
    pub const JAVA: i32 = 62;
    pub const JAVASCRIPT: i32 = 63;
    pub const PYTHON: i32 = 71;
    pub const RUST: i32 = 73;

    /// All supported language identifiers
    pub const ALL: &[i32] = &[C, CPP, JAVA, JAVASCRIPT, PYTHON, RUST];
}

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Submission endpoints - max requests
    pub const SUBMISSION_MAX_REQUESTS: i64 = 10;
    /// Submission endpoints - window in seconds
    pub const SUBMISSION_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum source code size in bytes (1 MB)
pub const MAX_SOURCE_CODE_SIZE: usize = 1024 * 1024;

/// Maximum comment length
pub const MAX_COMMENT_LENGTH: usize = 4096;

/// Maximum inline test cases accepted on the run path
pub const MAX_RUN_TEST_CASES: usize = 20;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
