//! Task board view.

use crate::{
    repository::domain::RepositoryReference,
    task::domain::{self, BoardColumn, TaskRecord, TaskStatus},
    view::{
        RecordView,
        ports::RecordSource,
        state::{LoadOutcome, LoadState},
    },
};
use std::sync::Arc;

/// Tasks of the selected repository, grouped into four status columns.
pub struct TaskBoard<S> {
    view: RecordView<TaskRecord, S>,
}

impl<S> TaskBoard<S>
where
    S: RecordSource<TaskRecord> + 'static,
{
    /// Creates a board in the loading state.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self {
            view: RecordView::new("tasks", source),
        }
    }

    /// Loads the tasks of `repository`, replacing the current set.
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
    pub fn state(&self) -> LoadState<TaskRecord> {
        self.view.state()
    }

    /// Returns `true` while tasks are being fetched.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// Returns the loaded tasks in fetch order.
    #[must_use]
    pub fn tasks(&self) -> Option<Vec<TaskRecord>> {
        self.view.records()
    }

    /// Returns the loaded tasks with `status`, in fetch order.
    #[must_use]
    pub fn column_tasks(&self, status: TaskStatus) -> Option<Vec<TaskRecord>> {
        self.tasks().map(|tasks| domain::column_tasks(&tasks, status))
    }

    /// Returns the four board columns in display order.
    #[must_use]
    pub fn columns(&self) -> Option<Vec<BoardColumn>> {
        self.tasks().map(|tasks| domain::partition(&tasks))
    }

    /// Returns the underlying record view.
    #[must_use]
    pub const fn view(&self) -> &RecordView<TaskRecord, S> {
        &self.view
    }
}

impl<S> Clone for TaskBoard<S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
        }
    }
}
