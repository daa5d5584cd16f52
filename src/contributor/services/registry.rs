//! Contributor registry view.

use crate::{
    contributor::domain::ContributorRecord,
    repository::domain::RepositoryReference,
    view::{
        RecordView,
        ports::RecordSource,
        state::{LoadOutcome, LoadState},
    },
};
use std::sync::Arc;

/// Contributors of the selected repository, in fetch order.
pub struct ContributorRegistry<S> {
    view: RecordView<ContributorRecord, S>,
}

impl<S> ContributorRegistry<S>
where
    S: RecordSource<ContributorRecord> + 'static,
{
    /// Creates a registry in the loading state.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self {
            view: RecordView::new("contributors", source),
        }
    }

    /// Loads the contributors of `repository`, replacing the current set.
    pub fn load(
        &self,
        repository: &RepositoryReference,
    ) -> impl Future<Output = LoadOutcome> + Send + use<S> {
        self.view.load(repository)
    }

    /// Cancels any in-flight load.
    pub fn cancel(&self) {
        self.view.cancel();
    }

    /// Returns a snapshot of the load state.
    #[must_use]
    pub fn state(&self) -> LoadState<ContributorRecord> {
        self.view.state()
    }

    /// Returns `true` while contributors are being fetched.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// Returns the loaded contributors.
    #[must_use]
    pub fn contributors(&self) -> Option<Vec<ContributorRecord>> {
        self.view.records()
    }

    /// Returns the number of loaded contributors.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        self.contributors().map(|contributors| contributors.len())
    }

    /// Returns the underlying record view.
    #[must_use]
    pub const fn view(&self) -> &RecordView<ContributorRecord, S> {
        &self.view
    }
}

impl<S> Clone for ContributorRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
        }
    }
}
