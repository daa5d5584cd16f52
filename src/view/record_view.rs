//! Generation-guarded record view.

use crate::{
    repository::domain::RepositoryReference,
    view::{
        ports::{RecordSource, SourceResult},
        state::{LoadOutcome, LoadState},
    },
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Record list loaded from a [`RecordSource`] for the selected repository.
///
/// Every call to [`RecordView::load`] starts a new generation. Starting a
/// generation cancels the fetch of the previous one, and a fetch only
/// commits its result while its generation is still current, so a slow
/// fetch for an old repository can never overwrite newer state.
///
/// Cloned views share state; the clone handed to a spawned load task
/// updates the view the shell renders.
pub struct RecordView<T, S> {
    label: &'static str,
    source: Arc<S>,
    state: Arc<RwLock<ViewState<T>>>,
    generation: Arc<watch::Sender<u64>>,
}

#[derive(Debug)]
struct ViewState<T> {
    generation: u64,
    repository: Option<RepositoryReference>,
    load: LoadState<T>,
}

impl<T, S> RecordView<T, S>
where
    T: Clone + Send + Sync + 'static,
    S: RecordSource<T> + 'static,
{
    /// Creates a view in the loading state.
    ///
    /// `label` names the view in log output.
    #[must_use]
    pub fn new(label: &'static str, source: Arc<S>) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            label,
            source,
            state: Arc::new(RwLock::new(ViewState {
                generation: 0,
                repository: None,
                load: LoadState::Loading,
            })),
            generation: Arc::new(generation),
        }
    }

    /// Fetches the records for `repository` and replaces the current set.
    ///
    /// The new generation is claimed when `load` is called, not when the
    /// returned future is first polled, so loads started in order supersede
    /// each other in that order even when spawned onto other tasks. The
    /// view reports [`LoadState::Loading`] until the fetch completes. Each
    /// call fully replaces the records; nothing is cached or merged.
    pub fn load(
        &self,
        repository: &RepositoryReference,
    ) -> impl Future<Output = LoadOutcome> + Send + use<T, S> {
        let generation = self.begin(repository);
        let receiver = self.generation.subscribe();
        let view = self.clone();
        let target = repository.clone();
        debug!(view = self.label, %repository, generation, "loading records");

        async move {
            let fetched = tokio::select! {
                result = view.source.fetch(&target) => result,
                () = superseded(receiver, generation) => {
                    debug!(view = view.label, repository = %target, generation, "load cancelled by a newer one");
                    return LoadOutcome::Superseded;
                }
            };

            view.commit(generation, &target, fetched)
        }
    }

    /// Cancels any in-flight load without starting a new one.
    ///
    /// The currently committed state stays visible.
    pub fn cancel(&self) {
        let mut state = self.write_state();
        state.generation += 1;
        state.repository = None;
        self.generation.send_replace(state.generation);
        debug!(view = self.label, generation = state.generation, "pending loads cancelled");
    }

    /// Returns a snapshot of the load state.
    #[must_use]
    pub fn state(&self) -> LoadState<T> {
        self.read_state().load.clone()
    }

    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read_state().load.is_loading()
    }

    /// Returns the loaded records, or `None` while loading or after a
    /// failure.
    #[must_use]
    pub fn records(&self) -> Option<Vec<T>> {
        self.read_state().load.records().map(<[T]>::to_vec)
    }

    /// Returns the repository of the latest load, if one is pending or
    /// committed.
    #[must_use]
    pub fn repository(&self) -> Option<RepositoryReference> {
        self.read_state().repository.clone()
    }

    /// Returns the current generation number.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.read_state().generation
    }

    fn begin(&self, repository: &RepositoryReference) -> u64 {
        let mut state = self.write_state();
        state.generation += 1;
        state.repository = Some(repository.clone());
        state.load = LoadState::Loading;
        self.generation.send_replace(state.generation);
        state.generation
    }

    fn commit(
        &self,
        generation: u64,
        repository: &RepositoryReference,
        fetched: SourceResult<Vec<T>>,
    ) -> LoadOutcome {
        let mut state = self.write_state();
        if state.generation != generation {
            debug!(view = self.label, %repository, generation, "discarding stale records");
            return LoadOutcome::Superseded;
        }

        match fetched {
            Ok(records) => {
                let count = records.len();
                info!(view = self.label, %repository, count, "records loaded");
                state.load = LoadState::Loaded(records);
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                warn!(view = self.label, %repository, error = %err, "record load failed");
                state.load = LoadState::Failed(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ViewState<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ViewState<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, S> Clone for RecordView<T, S> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
        }
    }
}

/// Resolves once the published generation differs from `generation`.
async fn superseded(mut receiver: watch::Receiver<u64>, generation: u64) {
    loop {
        if *receiver.borrow_and_update() != generation {
            return;
        }
        if receiver.changed().await.is_err() {
            // The sender lives as long as the view; without it nothing can
            // supersede this load.
            std::future::pending::<()>().await;
        }
    }
}
