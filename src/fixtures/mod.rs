//! JSON fixture files replacing the built-in sample records.
//!
//! A fixture file holds `{ "contributors": [...], "tasks": [...] }` with
//! camel-case field names. Every record is validated on load; unknown
//! classifications, statuses, or priorities reject the whole file.

use crate::{
    contributor::domain::{
        Classification, ContributionCounts, ContributorDomainError, ContributorRecord,
        NewContributor,
    },
    task::domain::{Assignee, NewTask, TaskDomainError, TaskPriority, TaskRecord, TaskStatus},
    view::adapters::StaticSource,
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::io;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors returned while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The file could not be read.
    #[error("failed to read fixture file {path}: {source}")]
    Io {
        /// Path of the fixture file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid fixture JSON.
    #[error("malformed fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A contributor entry failed validation.
    #[error("invalid contributor at index {index}: {source}")]
    Contributor {
        /// Position of the entry in the file.
        index: usize,
        /// Validation failure.
        #[source]
        source: ContributorDomainError,
    },

    /// A task entry failed validation.
    #[error("invalid task at index {index}: {source}")]
    Task {
        /// Position of the entry in the file.
        index: usize,
        /// Validation failure.
        #[source]
        source: TaskDomainError,
    },
}

/// Validated contributors and tasks read from a fixture file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureSet {
    contributors: Vec<ContributorRecord>,
    tasks: Vec<TaskRecord>,
}

impl FixtureSet {
    /// Reads and validates the fixture file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] when the file cannot be read, or the
    /// errors of [`FixtureSet::from_json`].
    pub fn load(path: &Utf8Path) -> Result<Self, FixtureError> {
        let io_error = |source| FixtureError::Io {
            path: path.to_owned(),
            source,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error(io::Error::other("fixture path must name a file")))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let text = dir.read_to_string(file_name).map_err(io_error)?;
        let fixtures = Self::from_json(&text)?;
        info!(
            %path,
            contributors = fixtures.contributors.len(),
            tasks = fixtures.tasks.len(),
            "fixtures loaded"
        );
        Ok(fixtures)
    }

    /// Parses and validates fixture JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Json`] for malformed JSON or missing fields,
    /// and [`FixtureError::Contributor`] or [`FixtureError::Task`] for the
    /// first entry that fails validation.
    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        let file: FixtureFile = serde_json::from_str(text)?;
        let contributors = file
            .contributors
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .into_record()
                    .map_err(|source| FixtureError::Contributor { index, source })
            })
            .collect::<Result<_, _>>()?;
        let tasks = file
            .tasks
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .into_record()
                    .map_err(|source| FixtureError::Task { index, source })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            contributors,
            tasks,
        })
    }

    /// Returns the contributors in file order.
    #[must_use]
    pub fn contributors(&self) -> &[ContributorRecord] {
        &self.contributors
    }

    /// Returns the tasks in file order.
    #[must_use]
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Splits the set into a contributor source and a task source.
    #[must_use]
    pub fn into_sources(
        self,
        contributor_delay: Duration,
        task_delay: Duration,
    ) -> (StaticSource<ContributorRecord>, StaticSource<TaskRecord>) {
        (
            StaticSource::new(self.contributors, contributor_delay),
            StaticSource::new(self.tasks, task_delay),
        )
    }
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    contributors: Vec<ContributorEntry>,
    #[serde(default)]
    tasks: Vec<TaskEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributorEntry {
    id: String,
    name: String,
    username: String,
    #[serde(default)]
    avatar: String,
    contributions: u32,
    issues: u32,
    pull_requests: u32,
    classification: String,
}

impl ContributorEntry {
    fn into_record(self) -> Result<ContributorRecord, ContributorDomainError> {
        ContributorRecord::new(NewContributor {
            id: self.id,
            name: self.name,
            handle: self.username,
            avatar: self.avatar,
            counts: ContributionCounts::new(self.contributions, self.issues, self.pull_requests),
            classification: Classification::try_from(self.classification.as_str())?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TaskEntry {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    assignee: Option<AssigneeEntry>,
    priority: String,
    status: String,
    #[serde(default)]
    labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AssigneeEntry {
    name: String,
    #[serde(default)]
    avatar: String,
}

impl TaskEntry {
    fn into_record(self) -> Result<TaskRecord, TaskDomainError> {
        let assignee = self
            .assignee
            .map(|entry| Assignee::new(entry.name, entry.avatar))
            .transpose()?;
        TaskRecord::new(NewTask {
            id: self.id,
            title: self.title,
            description: self.description,
            assignee,
            priority: TaskPriority::try_from(self.priority.as_str())?,
            status: TaskStatus::try_from(self.status.as_str())?,
            labels: self.labels,
        })
    }
}
