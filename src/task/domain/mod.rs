//! Domain model for the task board.
//!
//! Status and priority are closed enumerations; raw values are parsed at the
//! boundary and unknown values are rejected rather than dropped.

mod board;
mod error;
mod ids;
mod task;

pub use board::{BoardColumn, column_tasks, partition};
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{Assignee, NewTask, TaskPriority, TaskRecord, TaskStatus};
