//! Mounted dashboard and its pending loads.

use super::ShellResult;
use crate::{
    contributor::{domain::ContributorRecord, services::ContributorRegistry},
    repository::domain::RepositoryReference,
    shell::domain::DashboardSnapshot,
    task::{domain::TaskRecord, services::TaskBoard},
    view::{ports::RecordSource, state::LoadOutcome},
};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Contributor registry and task board shown for the selected repository.
pub struct Dashboard<CS, TS> {
    registry: ContributorRegistry<CS>,
    board: TaskBoard<TS>,
}

impl<CS, TS> Dashboard<CS, TS>
where
    CS: RecordSource<ContributorRecord> + 'static,
    TS: RecordSource<TaskRecord> + 'static,
{
    /// Creates a dashboard with both panels in the loading state.
    #[must_use]
    pub fn new(contributors: Arc<CS>, tasks: Arc<TS>) -> Self {
        Self {
            registry: ContributorRegistry::new(contributors),
            board: TaskBoard::new(tasks),
        }
    }

    /// Starts both loads for `repository` as independent tasks.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn_loads(&self, repository: &RepositoryReference) -> DashboardLoads {
        DashboardLoads {
            contributors: tokio::spawn(self.registry.load(repository)),
            tasks: tokio::spawn(self.board.load(repository)),
        }
    }

    /// Cancels in-flight loads of both panels.
    pub fn cancel(&self) {
        self.registry.cancel();
        self.board.cancel();
    }

    /// Returns the contributor registry.
    #[must_use]
    pub const fn registry(&self) -> &ContributorRegistry<CS> {
        &self.registry
    }

    /// Returns the task board.
    #[must_use]
    pub const fn board(&self) -> &TaskBoard<TS> {
        &self.board
    }

    /// Captures the state of both panels.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            contributors: self.registry.state(),
            tasks: self.board.state(),
        }
    }
}

impl<CS, TS> Clone for Dashboard<CS, TS> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            board: self.board.clone(),
        }
    }
}

/// Handles on the two loads started by one selection.
#[derive(Debug)]
pub struct DashboardLoads {
    contributors: JoinHandle<LoadOutcome>,
    tasks: JoinHandle<LoadOutcome>,
}

impl DashboardLoads {
    /// Waits for both loads to finish.
    ///
    /// # Errors
    ///
    /// Returns [`super::ShellError::Join`] when a load task panicked or was
    /// aborted.
    pub async fn wait(self) -> ShellResult<DashboardOutcome> {
        let (contributors, tasks) = tokio::join!(self.contributors, self.tasks);
        Ok(DashboardOutcome {
            contributors: contributors?,
            tasks: tasks?,
        })
    }

    /// Aborts both loads.
    pub fn abort(&self) {
        self.contributors.abort();
        self.tasks.abort();
    }
}

/// Outcome of both loads started by one selection.
#[derive(Debug, Clone)]
pub struct DashboardOutcome {
    /// Outcome of the contributor load.
    pub contributors: LoadOutcome,
    /// Outcome of the task load.
    pub tasks: LoadOutcome,
}
