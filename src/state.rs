//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use redis::aio::ConnectionManager;
use sqlx::PgPool;

use crate::{
    config::Config,
    db::repositories::StatusRegistry,
    error::AppResult,
    judge::HttpJudgeClient,
    services::{EvaluationService, PgSubmissionStore, PgTestCaseProvider},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Redis connection manager (rate-limit counters)
    redis: ConnectionManager,

    /// Evaluation pipeline over the external judge
    evaluation: EvaluationService<HttpJudgeClient>,

    /// Startup snapshot of the status-name -> status-id mapping
    statuses: StatusRegistry,

    /// Pg-backed submission store for the lifecycle manager
    submission_store: PgSubmissionStore,

    /// Pg-backed test case provider for the lifecycle manager
    test_case_provider: PgTestCaseProvider,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        db: PgPool,
        redis: ConnectionManager,
        judge: Arc<HttpJudgeClient>,
        statuses: StatusRegistry,
        config: Config,
    ) -> AppResult<Self> {
        let evaluation = EvaluationService::new(judge, statuses.clone(), &config.evaluation);
        let submission_store = PgSubmissionStore::new(db.clone(), &statuses)?;
        let test_case_provider = PgTestCaseProvider::new(db.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                db,
                redis,
                evaluation,
                statuses,
                submission_store,
                test_case_provider,
                config,
            }),
        })
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a clone of the Redis connection manager
    pub fn redis(&self) -> ConnectionManager {
        self.inner.redis.clone()
    }

    /// Get a reference to the evaluation pipeline
    pub fn evaluation(&self) -> &EvaluationService<HttpJudgeClient> {
        &self.inner.evaluation
    }

    /// Get a reference to the status registry
    pub fn statuses(&self) -> &StatusRegistry {
        &self.inner.statuses
    }

    /// Get a reference to the submission store
    pub fn submission_store(&self) -> &PgSubmissionStore {
        &self.inner.submission_store
    }

    /// Get a reference to the test case provider
    pub fn test_case_provider(&self) -> &PgTestCaseProvider {
        &self.inner.test_case_provider
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
