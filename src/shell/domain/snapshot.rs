//! Point-in-time copies of shell state for rendering.

use super::Theme;
use crate::{
    contributor::domain::ContributorRecord, repository::domain::RepositoryReference,
    task::domain::TaskRecord, view::state::LoadState,
};

/// State of both dashboard panels at one instant.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Contributor registry state.
    pub contributors: LoadState<ContributorRecord>,
    /// Task board state.
    pub tasks: LoadState<TaskRecord>,
}

/// Everything the renderer needs to draw the application.
#[derive(Debug, Clone)]
pub struct ShellSnapshot {
    /// Active theme.
    pub theme: Theme,
    /// Selected repository, if any.
    pub selected: Option<RepositoryReference>,
    /// Whether a submission is in flight.
    pub busy: bool,
    /// Dashboard state; `None` until a repository is selected.
    pub dashboard: Option<DashboardSnapshot>,
}
