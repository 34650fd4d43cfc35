//! Business logic services

pub mod comment_service;
pub mod evaluation_service;
pub mod problem_service;
pub mod profile_service;
pub mod submission_service;

pub use comment_service::CommentService;
pub use evaluation_service::{
    EvaluationService, PgSubmissionStore, PgTestCaseProvider, SubmissionStore, SubmitOutcome,
    TestCaseProvider,
};
pub use problem_service::ProblemService;
pub use profile_service::ProfileService;
pub use submission_service::SubmissionService;
