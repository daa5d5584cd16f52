//! End-to-end dashboard flow tests against the built-in samples.

use std::time::Duration;

use super::helpers::{Harness, config, harness};
use oss_manager::{
    config::AppConfig,
    render::services::DashboardRenderer,
    repository::{domain::RepositoryReference, services::SelectionError},
    shell::{domain::Theme, services::ShellError},
    task::domain::TaskStatus,
    view::state::LoadOutcome,
};
use rstest::rstest;
use tokio::time::Instant;

const LINUX: &str = "https://github.com/torvalds/linux";
const RUST: &str = "https://github.com/rust-lang/rust";

#[rstest]
#[tokio::test(start_paused = true)]
async fn configured_delays_drive_the_whole_flow(config: AppConfig, harness: Harness) {
    let Harness { shell, center } = harness;
    let started = Instant::now();

    let submission = shell.submit(LINUX).await.expect("submission succeeds");
    assert!(started.elapsed() >= config.selector_delay);
    assert_eq!(center.notifications().len(), 1);

    let dashboard = shell.dashboard().expect("dashboard mounted");
    let tasks_first = async {
        while dashboard.board().is_loading() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        dashboard.registry().is_loading()
    };
    let (joined, contributors_still_loading) =
        tokio::join!(submission.loads.wait(), tasks_first);

    let outcome = joined.expect("loads join");
    assert!(contributors_still_loading);
    assert!(matches!(outcome.contributors, LoadOutcome::Loaded { count: 4 }));
    assert!(matches!(outcome.tasks, LoadOutcome::Loaded { count: 4 }));
    let settled = config.selector_delay + config.contributor_delay;
    assert!(started.elapsed() >= settled);
    assert!(started.elapsed() < settled + Duration::from_millis(50));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn loaded_board_places_every_sample_task_in_its_column(harness: Harness) {
    let shell = harness.shell;
    let submission = shell.submit(LINUX).await.expect("submission succeeds");
    submission.loads.wait().await.expect("loads join");

    let dashboard = shell.dashboard().expect("dashboard mounted");
    let columns = dashboard.board().columns().expect("tasks loaded");

    let layout: Vec<(TaskStatus, usize)> = columns
        .iter()
        .map(|column| (column.status(), column.count()))
        .collect();
    assert_eq!(
        layout,
        TaskStatus::ALL.iter().map(|status| (*status, 1)).collect::<Vec<_>>()
    );
    assert!(
        columns
            .iter()
            .all(|column| column.tasks().iter().all(|task| task.status() == column.status()))
    );
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn a_second_submission_retargets_the_dashboard(harness: Harness) {
    let shell = harness.shell;
    let first = shell.submit(LINUX).await.expect("first submission");
    let second = shell.submit(RUST).await.expect("second submission");

    let first_outcome = first.loads.wait().await.expect("first loads join");
    second.loads.wait().await.expect("second loads join");

    // The first loads finish during the second connection delay and commit.
    assert!(first_outcome.contributors.is_loaded());
    let dashboard = shell.dashboard().expect("dashboard mounted");
    assert_eq!(
        dashboard.registry().view().repository(),
        Some(RepositoryReference::parse(RUST).expect("valid URL"))
    );
    assert_eq!(dashboard.registry().count(), Some(4));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn an_invalid_url_after_a_selection_keeps_the_dashboard(harness: Harness) {
    let Harness { shell, center } = harness;
    let submission = shell.submit(LINUX).await.expect("submission succeeds");
    submission.loads.wait().await.expect("loads join");

    let rejected = shell.submit("github.com/torvalds/linux").await;

    assert!(matches!(
        rejected.as_ref().err().and_then(ShellError::selection),
        Some(SelectionError::Reference(_))
    ));
    assert_eq!(
        shell.selected_repository().map(|r| r.full_name()),
        Some("torvalds/linux".to_owned())
    );
    assert_eq!(
        shell.dashboard().and_then(|dashboard| dashboard.registry().count()),
        Some(4)
    );
    assert!(center.latest().is_some_and(|n| n.is_destructive()));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn rendered_page_follows_the_shell_through_a_session(harness: Harness) {
    let shell = harness.shell;
    let renderer = DashboardRenderer::new().expect("templates compile");

    let idle = renderer.render(&shell.snapshot()).expect("idle page renders");
    assert!(idle.contains("[Fetch Repository]"));
    assert!(!idle.contains("== Contributors"));

    let submission = shell.submit(LINUX).await.expect("submission succeeds");
    let loading = renderer.render(&shell.snapshot()).expect("loading page renders");
    assert!(loading.contains("[ .......... ]"));

    submission.loads.wait().await.expect("loads join");
    assert_eq!(shell.toggle_theme(), Theme::Dark);
    let loaded = renderer.render(&shell.snapshot()).expect("loaded page renders");
    assert!(loaded.contains("== Contributors (4) =="));
    assert!(loaded.contains("-- In Progress (1) --"));
    assert!(loaded.contains("dark theme"));
    assert!(loaded.contains(LINUX));
}
