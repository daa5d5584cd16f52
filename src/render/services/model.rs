//! Serialisable view models handed to the templates.

use crate::{
    contributor::domain::ContributorRecord,
    render::domain::BadgeTone,
    shell::domain::{DashboardSnapshot, ShellSnapshot, Theme},
    task::domain::{self, BoardColumn, TaskRecord},
    view::state::LoadState,
};
use serde::Serialize;

const APP_NAME: &str = "Open Source Manager";
const TAGLINE: &str = "Modern contribution management with Agile/Scrum integration. \
                       Streamline your open-source workflow.";

#[derive(Debug, Serialize)]
pub(super) struct PageModel {
    app_name: &'static str,
    tagline: &'static str,
    theme: Theme,
    next_theme: Theme,
    button_label: &'static str,
    busy: bool,
    selected: Option<String>,
    dashboard: Option<DashboardModel>,
}

impl PageModel {
    pub(super) fn from_snapshot(snapshot: &ShellSnapshot) -> Self {
        Self {
            app_name: APP_NAME,
            tagline: TAGLINE,
            theme: snapshot.theme,
            next_theme: snapshot.theme.toggled(),
            button_label: if snapshot.busy {
                "Fetching..."
            } else {
                "Fetch Repository"
            },
            busy: snapshot.busy,
            selected: snapshot.selected.as_ref().map(ToString::to_string),
            dashboard: snapshot
                .dashboard
                .as_ref()
                .map(|dashboard| DashboardModel::new(dashboard, snapshot.theme)),
        }
    }
}

#[derive(Debug, Serialize)]
struct DashboardModel {
    contributors: Panel<ContributorCard>,
    board: Panel<ColumnModel>,
}

impl DashboardModel {
    fn new(dashboard: &DashboardSnapshot, theme: Theme) -> Self {
        Self {
            contributors: Panel::new(&dashboard.contributors, |records| {
                records
                    .iter()
                    .map(|record| ContributorCard::new(record, theme))
                    .collect()
            }),
            board: Panel::new(&dashboard.tasks, |records| {
                domain::partition(records)
                    .iter()
                    .map(|column| ColumnModel::new(column, theme))
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum PanelState {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Serialize)]
struct Panel<M> {
    state: PanelState,
    entries: Vec<M>,
    error: Option<String>,
}

impl<M> Panel<M> {
    fn new<T>(state: &LoadState<T>, build: impl FnOnce(&[T]) -> Vec<M>) -> Self {
        match state {
            LoadState::Loading => Self {
                state: PanelState::Loading,
                entries: Vec::new(),
                error: None,
            },
            LoadState::Loaded(records) => Self {
                state: PanelState::Loaded,
                entries: build(records),
                error: None,
            },
            LoadState::Failed(err) => Self {
                state: PanelState::Failed,
                entries: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Badge {
    label: String,
    tone: BadgeTone,
    classes: String,
}

impl Badge {
    fn new(label: impl Into<String>, tone: BadgeTone, theme: Theme) -> Self {
        Self {
            label: label.into(),
            tone,
            classes: tone.palette(theme).classes(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ContributorCard {
    initials: String,
    name: String,
    handle: String,
    badge: Badge,
    commits: u32,
    issues: u32,
    pull_requests: u32,
}

impl ContributorCard {
    fn new(record: &ContributorRecord, theme: Theme) -> Self {
        let classification = record.classification();
        let counts = record.counts();
        Self {
            initials: record.initials(),
            name: record.name().to_owned(),
            handle: record.display_handle(),
            badge: Badge::new(classification.label(), classification.into(), theme),
            commits: counts.commits,
            issues: counts.issues,
            pull_requests: counts.pull_requests,
        }
    }
}

#[derive(Debug, Serialize)]
struct ColumnModel {
    title: &'static str,
    count: usize,
    tasks: Vec<TaskCard>,
}

impl ColumnModel {
    fn new(column: &BoardColumn, theme: Theme) -> Self {
        Self {
            title: column.title(),
            count: column.count(),
            tasks: column
                .tasks()
                .iter()
                .map(|task| TaskCard::new(task, theme))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TaskCard {
    title: String,
    priority: Badge,
    description: String,
    labels: Vec<String>,
    assignee: Option<AssigneeModel>,
}

#[derive(Debug, Serialize)]
struct AssigneeModel {
    initials: String,
    name: String,
}

impl TaskCard {
    fn new(task: &TaskRecord, theme: Theme) -> Self {
        let priority = task.priority();
        Self {
            title: task.title().to_owned(),
            priority: Badge::new(priority.as_str(), priority.into(), theme),
            description: task.description().to_owned(),
            labels: task.labels().to_vec(),
            assignee: task.assignee().map(|assignee| AssigneeModel {
                initials: assignee.initials(),
                name: assignee.name().to_owned(),
            }),
        }
    }
}
