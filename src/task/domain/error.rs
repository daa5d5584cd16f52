//! Error types for task validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyId,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The assignee name is empty after trimming.
    #[error("assignee name must not be empty")]
    EmptyAssigneeName,

    /// The status value is not one of the board columns.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),

    /// The priority value is not recognised.
    #[error(transparent)]
    Priority(#[from] ParseTaskPriorityError),
}

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
