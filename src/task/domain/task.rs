//! Task record and its lifecycle enumerations.

use super::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError, TaskId};
use crate::contributor::domain::initials_of;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task; each status is one board column.
///
/// Variants are declared in display order, so the derived ordering matches
/// the board layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is under way.
    InProgress,
    /// Work is awaiting review.
    Review,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal priority.
    Medium,
    /// Needs attention first.
    High,
}

impl TaskPriority {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Person a task is assigned to.
///
/// This is a denormalised name and avatar pair, not a link to a contributor
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignee {
    name: String,
    avatar: String,
}

impl Assignee {
    /// Creates a validated assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyAssigneeName`] when the name is blank.
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw_name = name.into();
        let normalized = raw_name.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyAssigneeName);
        }
        Ok(Self {
            name: normalized.to_owned(),
            avatar: avatar.into().trim().to_owned(),
        })
    }

    /// Returns the assignee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar reference.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the first letter of every word of the name.
    #[must_use]
    pub fn initials(&self) -> String {
        initials_of(&self.name)
    }
}

/// Parameter object for constructing a [`TaskRecord`] from raw values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Record identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Assignee, if any.
    pub assignee: Option<Assignee>,
    /// Priority.
    pub priority: TaskPriority,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Free-text labels in display order.
    pub labels: Vec<String>,
}

/// One unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    id: TaskId,
    title: String,
    description: String,
    assignee: Option<Assignee>,
    priority: TaskPriority,
    status: TaskStatus,
    labels: Vec<String>,
}

impl TaskRecord {
    /// Creates a validated task record.
    ///
    /// Labels keep their order; duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the identifier or title is blank.
    pub fn new(data: NewTask) -> Result<Self, TaskDomainError> {
        let id = TaskId::new(data.id)?;
        let title = data.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            id,
            title: title.to_owned(),
            description: data.description.trim().to_owned(),
            assignee: data.assignee,
            priority: data.priority,
            status: data.status,
            labels: data.labels,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the labels in display order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
