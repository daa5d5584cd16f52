//! Domain-focused tests for task records and board partitioning.

use crate::task::{
    adapters::sample_tasks,
    domain::{
        Assignee, NewTask, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError,
        TaskPriority, TaskRecord, TaskStatus, column_tasks, partition,
    },
};
use rstest::{fixture, rstest};

fn task(id: &str, status: TaskStatus) -> TaskRecord {
    TaskRecord::new(NewTask {
        id: id.to_owned(),
        title: format!("Task {id}"),
        description: String::new(),
        assignee: None,
        priority: TaskPriority::Medium,
        status,
        labels: Vec::new(),
    })
    .expect("valid task")
}

#[fixture]
fn mixed_tasks() -> Vec<TaskRecord> {
    vec![
        task("a", TaskStatus::Done),
        task("b", TaskStatus::Todo),
        task("c", TaskStatus::Done),
        task("d", TaskStatus::Review),
        task("e", TaskStatus::Todo),
    ]
}

fn ids(tasks: &[TaskRecord]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}

#[rstest]
#[case("todo", TaskStatus::Todo)]
#[case("in-progress", TaskStatus::InProgress)]
#[case(" Review ", TaskStatus::Review)]
#[case("DONE", TaskStatus::Done)]
fn status_parses_known_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
#[case("blocked")]
#[case("in_progress")]
#[case("")]
fn status_rejects_unknown_values(#[case] raw: &str) {
    assert_eq!(
        TaskStatus::try_from(raw),
        Err(ParseTaskStatusError(raw.to_owned()))
    );
}

#[rstest]
fn priority_rejects_unknown_values() {
    assert_eq!(TaskPriority::try_from("High"), Ok(TaskPriority::High));
    assert_eq!(
        TaskPriority::try_from("urgent"),
        Err(ParseTaskPriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn statuses_are_listed_in_column_order() {
    let titles: Vec<&str> = TaskStatus::ALL.iter().map(|status| status.title()).collect();

    assert_eq!(titles, vec!["To Do", "In Progress", "Review", "Done"]);
    assert!(TaskStatus::Todo < TaskStatus::Done);
}

#[rstest]
fn new_rejects_blank_title() {
    let result = TaskRecord::new(NewTask {
        id: "1".to_owned(),
        title: "   ".to_owned(),
        description: String::new(),
        assignee: None,
        priority: TaskPriority::Low,
        status: TaskStatus::Todo,
        labels: Vec::new(),
    });

    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn new_keeps_duplicate_labels_in_order() {
    let record = TaskRecord::new(NewTask {
        id: "1".to_owned(),
        title: "Triage".to_owned(),
        description: "  Sort the inbox ".to_owned(),
        assignee: Some(Assignee::new("Sarah Chen", "/placeholder.svg").expect("valid assignee")),
        priority: TaskPriority::Low,
        status: TaskStatus::Todo,
        labels: vec!["ui".to_owned(), "bug".to_owned(), "ui".to_owned()],
    })
    .expect("valid task");

    assert_eq!(record.labels(), ["ui", "bug", "ui"]);
    assert_eq!(record.description(), "Sort the inbox");
    assert_eq!(record.assignee().map(Assignee::initials), Some("SC".to_owned()));
}

#[rstest]
fn assignee_requires_a_name() {
    assert_eq!(
        Assignee::new(" ", "/placeholder.svg"),
        Err(TaskDomainError::EmptyAssigneeName)
    );
}

#[rstest]
fn column_tasks_preserves_relative_order(mixed_tasks: Vec<TaskRecord>) {
    assert_eq!(ids(&column_tasks(&mixed_tasks, TaskStatus::Done)), vec!["a", "c"]);
    assert_eq!(ids(&column_tasks(&mixed_tasks, TaskStatus::Todo)), vec!["b", "e"]);
    assert!(column_tasks(&mixed_tasks, TaskStatus::InProgress).is_empty());
}

#[rstest]
fn partition_places_every_task_in_exactly_one_column(mixed_tasks: Vec<TaskRecord>) {
    let columns = partition(&mixed_tasks);

    let statuses: Vec<TaskStatus> = columns.iter().map(|column| column.status()).collect();
    assert_eq!(statuses, TaskStatus::ALL.to_vec());
    assert_eq!(
        columns.iter().map(|column| column.count()).sum::<usize>(),
        mixed_tasks.len()
    );
    for column in &columns {
        assert!(column.tasks().iter().all(|task| task.status() == column.status()));
    }
}

#[rstest]
fn partition_of_no_tasks_still_yields_four_empty_columns() {
    let columns = partition(&[]);

    assert_eq!(columns.len(), 4);
    assert!(columns.iter().all(|column| column.count() == 0));
}

#[rstest]
fn sample_tasks_cover_every_column_once() {
    let tasks = sample_tasks().expect("samples are valid");

    let counts: Vec<usize> = partition(&tasks).iter().map(|column| column.count()).collect();
    assert_eq!(counts, vec![1, 1, 1, 1]);
    let unassigned: Vec<&str> = tasks
        .iter()
        .filter(|task| task.assignee().is_none())
        .map(TaskRecord::title)
        .collect();
    assert_eq!(unassigned, vec!["Add dark mode support"]);
}
