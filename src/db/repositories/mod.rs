//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod comment_repo;
pub mod problem_repo;
pub mod status_repo;
pub mod submission_repo;
pub mod test_case_repo;
pub mod user_repo;

pub use comment_repo::CommentRepository;
pub use problem_repo::ProblemRepository;
pub use status_repo::{StatusRegistry, StatusRepository};
pub use submission_repo::SubmissionRepository;
pub use test_case_repo::TestCaseRepository;
pub use user_repo::UserRepository;
