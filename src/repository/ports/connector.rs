//! Connector port for the remote round-trip performed on submission.

use crate::repository::domain::RepositoryReference;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Remote connection contract used when a repository is submitted.
#[async_trait]
pub trait RepositoryConnector: Send + Sync {
    /// Confirms that the repository can be reached.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError`] when the repository data cannot be
    /// fetched.
    async fn connect(&self, repository: &RepositoryReference) -> ConnectorResult<()>;
}

/// Errors returned by connector implementations.
#[derive(Debug, Clone, Error)]
pub enum ConnectorError {
    /// The simulated round-trip was configured to fail.
    #[error("simulated connection failure for {0}")]
    SimulatedFailure(RepositoryReference),

    /// The remote end could not be reached.
    #[error("repository unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConnectorError {
    /// Wraps a transport error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
