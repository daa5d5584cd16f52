//! Shell service owning the selected repository.

use super::{Dashboard, DashboardLoads};
use crate::{
    contributor::domain::ContributorRecord,
    repository::{
        domain::RepositoryReference,
        ports::RepositoryConnector,
        services::{RepositorySelector, SelectionError},
    },
    shell::domain::{SelectedRepository, SelectedRepositoryView, ShellSnapshot, Theme},
    task::domain::TaskRecord,
    view::ports::RecordSource,
};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::info;

/// Errors returned by the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The selector rejected the submission.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The selector accepted the submission without mounting the dashboard.
    #[error("repository was accepted but the dashboard was not mounted")]
    NotMounted,

    /// A dashboard load task panicked or was aborted.
    #[error("dashboard load task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ShellError {
    /// Returns the selector error, if the submission was rejected.
    #[must_use]
    pub const fn selection(&self) -> Option<&SelectionError> {
        match self {
            Self::Selection(err) => Some(err),
            Self::NotMounted | Self::Join(_) => None,
        }
    }
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Accepted submission and the loads it started.
#[derive(Debug)]
pub struct Submission {
    /// The newly selected repository.
    pub repository: RepositoryReference,
    /// Handles on the contributor and task loads.
    pub loads: DashboardLoads,
}

/// Root of the application: selector, selection, dashboard, and theme.
pub struct Shell<C, K, CS, TS>
where
    C: RepositoryConnector,
    K: Clock + Send + Sync,
{
    selector: RepositorySelector<C, K>,
    selected: SelectedRepository,
    contributors: Arc<CS>,
    tasks: Arc<TS>,
    dashboard: RwLock<Option<Dashboard<CS, TS>>>,
    theme: RwLock<Theme>,
}

impl<C, K, CS, TS> Shell<C, K, CS, TS>
where
    C: RepositoryConnector,
    K: Clock + Send + Sync,
    CS: RecordSource<ContributorRecord> + 'static,
    TS: RecordSource<TaskRecord> + 'static,
{
    /// Creates a shell with nothing selected and no dashboard mounted.
    #[must_use]
    pub fn new(
        selector: RepositorySelector<C, K>,
        contributors: Arc<CS>,
        tasks: Arc<TS>,
        theme: Theme,
    ) -> Self {
        Self {
            selector,
            selected: SelectedRepository::new(),
            contributors,
            tasks,
            dashboard: RwLock::new(None),
            theme: RwLock::new(theme),
        }
    }

    /// Selects `repository` and starts loading its dashboard.
    ///
    /// The selection is replaced unconditionally. The dashboard is mounted
    /// on the first selection and reused afterwards; every call starts
    /// fresh contributor and task loads that supersede earlier ones.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn on_repo_select(&self, repository: &RepositoryReference) -> DashboardLoads {
        let previous = self.selected.set(repository.clone());
        info!(
            %repository,
            previous = previous.as_ref().map(RepositoryReference::as_str),
            "repository selected"
        );

        let mut dashboard = self.write_dashboard();
        let mounted = dashboard.get_or_insert_with(|| {
            info!("dashboard mounted");
            Dashboard::new(Arc::clone(&self.contributors), Arc::clone(&self.tasks))
        });
        mounted.spawn_loads(repository)
    }

    /// Runs the selector with [`Shell::on_repo_select`] as its callback.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Selection`] when the selector rejects the
    /// input; the selection is left unchanged.
    pub async fn submit(&self, raw_input: &str) -> ShellResult<Submission> {
        let mut started = None;
        let repository = self
            .selector
            .submit(raw_input, |reference| {
                started = Some(self.on_repo_select(reference));
            })
            .await?;
        let loads = started.ok_or(ShellError::NotMounted)?;
        Ok(Submission { repository, loads })
    }

    /// Empties the selection, cancels pending loads, and unmounts the
    /// dashboard.
    pub fn clear_selection(&self) {
        let previous = self.selected.clear();
        if let Some(dashboard) = self.write_dashboard().take() {
            dashboard.cancel();
            info!(
                previous = previous.as_ref().map(RepositoryReference::as_str),
                "dashboard unmounted"
            );
        }
    }

    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.selector.is_busy()
    }

    /// Returns the selected repository.
    #[must_use]
    pub fn selected_repository(&self) -> Option<RepositoryReference> {
        self.selected.get()
    }

    /// Returns a read-only view of the selection.
    #[must_use]
    pub fn subscribe(&self) -> SelectedRepositoryView {
        self.selected.view()
    }

    /// Returns the mounted dashboard, if a repository is selected.
    #[must_use]
    pub fn dashboard(&self) -> Option<Dashboard<CS, TS>> {
        self.read_dashboard().clone()
    }

    /// Returns the active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        *self.theme.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switches between the light and dark theme and returns the new one.
    pub fn toggle_theme(&self) -> Theme {
        let mut theme = self.theme.write().unwrap_or_else(PoisonError::into_inner);
        let toggled = theme.toggled();
        *theme = toggled;
        info!(theme = %toggled, "theme toggled");
        toggled
    }

    /// Captures the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            theme: self.theme(),
            selected: self.selected.get(),
            busy: self.is_busy(),
            dashboard: self.read_dashboard().as_ref().map(Dashboard::snapshot),
        }
    }

    fn read_dashboard(&self) -> RwLockReadGuard<'_, Option<Dashboard<CS, TS>>> {
        self.dashboard.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_dashboard(&self) -> RwLockWriteGuard<'_, Option<Dashboard<CS, TS>>> {
        self.dashboard.write().unwrap_or_else(PoisonError::into_inner)
    }
}
