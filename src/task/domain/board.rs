//! Partitioning of tasks into board columns.

use super::{TaskRecord, TaskStatus};
use serde::Serialize;

/// One column of the task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    status: TaskStatus,
    tasks: Vec<TaskRecord>,
}

impl BoardColumn {
    /// Returns the status this column holds.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.status.title()
    }

    /// Returns the tasks in fetch order.
    #[must_use]
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// Returns the tasks with `status`, preserving their relative order.
#[must_use]
pub fn column_tasks(tasks: &[TaskRecord], status: TaskStatus) -> Vec<TaskRecord> {
    tasks
        .iter()
        .filter(|task| task.status() == status)
        .cloned()
        .collect()
}

/// Splits `tasks` into the four board columns in display order.
///
/// Every task lands in exactly one column, so the column counts always sum
/// to the number of tasks.
#[must_use]
pub fn partition(tasks: &[TaskRecord]) -> Vec<BoardColumn> {
    TaskStatus::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status,
            tasks: column_tasks(tasks, status),
        })
        .collect()
}
