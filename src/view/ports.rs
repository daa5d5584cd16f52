//! Record source port used by record views.

use crate::repository::domain::RepositoryReference;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Provider of the records shown for a repository.
#[async_trait]
pub trait RecordSource<T>: Send + Sync
where
    T: Send,
{
    /// Fetches the complete record list for `repository`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the records cannot be produced.
    async fn fetch(&self, repository: &RepositoryReference) -> SourceResult<Vec<T>>;
}

/// Errors returned by record sources.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The records for the repository could not be retrieved.
    #[error("records for {repository} are unavailable: {reason}")]
    Unavailable {
        /// Repository whose records were requested.
        repository: RepositoryReference,
        /// Human-readable reason.
        reason: String,
    },

    /// A record failed boundary validation.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Backend-specific failure.
    #[error("record source error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
