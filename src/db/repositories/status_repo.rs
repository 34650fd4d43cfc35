//! Submission status repository and registry

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::{AppError, AppResult},
    judge::StatusKind,
    models::SubmissionStatus,
};

/// Repository for the `submission_statuses` lookup table
pub struct StatusRepository;

impl StatusRepository {
    /// Load every status row
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<SubmissionStatus>> {
        let statuses = sqlx::query_as::<_, SubmissionStatus>(
            r#"SELECT id, status_name FROM submission_statuses ORDER BY id"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(statuses)
    }
}

/// Startup snapshot of the status-name -> status-id mapping.
///
/// Resolving through a snapshot removes the per-finalize database lookup
/// the status table would otherwise require; a name missing from the table
/// surfaces as `UnknownStatus` at finalize time and the submission stays
/// `Pending`.
#[derive(Debug, Clone)]
pub struct StatusRegistry {
    by_name: HashMap<String, i32>,
}

impl StatusRegistry {
    /// Build the registry from the `submission_statuses` table.
    pub async fn load(pool: &PgPool) -> AppResult<Self> {
        let rows = StatusRepository::list_all(pool).await?;

        let by_name = rows
            .into_iter()
            .map(|row| (row.status_name, row.id))
            .collect();

        Ok(Self { by_name })
    }

    /// Build a registry from explicit pairs (used by tests).
    pub fn from_pairs(pairs: impl IntoIterator<Item = (&'static str, i32)>) -> Self {
        Self {
            by_name: pairs
                .into_iter()
                .map(|(name, id)| (name.to_string(), id))
                .collect(),
        }
    }

    /// Resolve a status to its storage identifier.
    pub fn resolve(&self, status: StatusKind) -> AppResult<i32> {
        self.by_name
            .get(status.as_str())
            .copied()
            .ok_or_else(|| AppError::UnknownStatus(status.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_status() {
        let registry = StatusRegistry::from_pairs([("Pending", 1), ("Accepted", 2)]);
        assert_eq!(registry.resolve(StatusKind::Accepted).unwrap(), 2);
        assert_eq!(registry.resolve(StatusKind::Pending).unwrap(), 1);
    }

    #[test]
    fn test_resolve_unknown_status_errors() {
        let registry = StatusRegistry::from_pairs([("Pending", 1)]);
        let err = registry.resolve(StatusKind::WrongAnswer).unwrap_err();
        assert!(matches!(err, AppError::UnknownStatus(name) if name == "Wrong Answer"));
    }
}
