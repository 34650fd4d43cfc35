//! Submission evaluation pipeline
//!
//! The pipeline turns a user's source code plus an ordered set of test
//! cases into one authoritative outcome: the client performs one judge
//! round-trip per case, the dispatcher fans those calls out concurrently
//! and keeps the results index-aligned, and the aggregator reduces the
//! verdict sequence to a submission-level status and timing.

pub mod aggregator;
pub mod client;
pub mod dispatcher;
pub mod verdict;

pub use aggregator::aggregate;
pub use client::{CaseResult, HttpJudgeClient, Judge, JudgeError};
pub use dispatcher::{CaseInput, Dispatcher, FailurePolicy};
pub use verdict::{StatusKind, Verdict};
