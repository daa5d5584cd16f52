//! Built-in sample tasks.

use crate::{
    task::domain::{Assignee, NewTask, TaskDomainError, TaskPriority, TaskRecord, TaskStatus},
    view::adapters::StaticSource,
};
use std::time::Duration;

/// Default latency of the sample task source.
pub const DEFAULT_TASK_DELAY: Duration = Duration::from_millis(800);

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

struct Sample {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    assignee: Option<&'static str>,
    priority: TaskPriority,
    status: TaskStatus,
    labels: &'static [&'static str],
}

const SAMPLES: [Sample; 4] = [
    Sample {
        id: "1",
        title: "Implement user authentication",
        description: "Add OAuth integration with GitHub",
        assignee: Some("Alex Johnson"),
        priority: TaskPriority::High,
        status: TaskStatus::InProgress,
        labels: &["feature", "auth"],
    },
    Sample {
        id: "2",
        title: "Fix responsive layout issues",
        description: "Mobile breakpoints need adjustment",
        assignee: Some("Sarah Chen"),
        priority: TaskPriority::Medium,
        status: TaskStatus::Todo,
        labels: &["bug", "ui"],
    },
    Sample {
        id: "3",
        title: "Add dark mode support",
        description: "Implement theme switching functionality",
        assignee: None,
        priority: TaskPriority::Low,
        status: TaskStatus::Review,
        labels: &["enhancement", "ui"],
    },
    Sample {
        id: "4",
        title: "Setup CI/CD pipeline",
        description: "Configure GitHub Actions for deployment",
        assignee: Some("Mike Rodriguez"),
        priority: TaskPriority::High,
        status: TaskStatus::Done,
        labels: &["devops"],
    },
];

/// Returns the sample tasks served when no fixture file is given.
///
/// # Errors
///
/// Returns [`TaskDomainError`] if a sample fails validation.
pub fn sample_tasks() -> Result<Vec<TaskRecord>, TaskDomainError> {
    SAMPLES.iter().map(build).collect()
}

/// Creates a source serving the sample tasks after `delay`.
///
/// # Errors
///
/// Returns [`TaskDomainError`] if a sample fails validation.
pub fn sample_source(delay: Duration) -> Result<StaticSource<TaskRecord>, TaskDomainError> {
    Ok(StaticSource::new(sample_tasks()?, delay))
}

fn build(sample: &Sample) -> Result<TaskRecord, TaskDomainError> {
    let assignee = sample
        .assignee
        .map(|name| Assignee::new(name, PLACEHOLDER_AVATAR))
        .transpose()?;
    TaskRecord::new(NewTask {
        id: sample.id.to_owned(),
        title: sample.title.to_owned(),
        description: sample.description.to_owned(),
        assignee,
        priority: sample.priority,
        status: sample.status,
        labels: sample.labels.iter().map(|&label| label.to_owned()).collect(),
    })
}
