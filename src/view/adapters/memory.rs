//! Fixed in-memory record source with simulated latency.

use crate::{
    repository::domain::RepositoryReference,
    view::ports::{RecordSource, SourceResult},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Source returning the same records for every repository after a delay.
///
/// The delay stands in for the latency of a real API call.
#[derive(Debug, Clone)]
pub struct StaticSource<T> {
    records: Vec<T>,
    delay: Duration,
}

impl<T> StaticSource<T> {
    /// Creates a source serving `records` after `delay`.
    #[must_use]
    pub const fn new(records: Vec<T>, delay: Duration) -> Self {
        Self { records, delay }
    }

    /// Returns the served records.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Returns the simulated latency.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl<T> RecordSource<T> for StaticSource<T>
where
    T: Clone + Send + Sync,
{
    async fn fetch(&self, repository: &RepositoryReference) -> SourceResult<Vec<T>> {
        debug!(
            %repository,
            records = self.records.len(),
            delay_ms = self.delay.as_millis(),
            "serving static records"
        );
        tokio::time::sleep(self.delay).await;
        Ok(self.records.clone())
    }
}
