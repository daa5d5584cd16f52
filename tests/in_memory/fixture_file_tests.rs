//! Dashboards backed by fixture files written to a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::helpers::harness_with_sources;
use oss_manager::{
    config::AppConfig,
    fixtures::{FixtureError, FixtureSet},
    task::domain::TaskStatus,
    view::state::LoadOutcome,
};

const FIXTURE_JSON: &str = r#"{
    "contributors": [
        {
            "id": "c1",
            "name": "Grace Hopper",
            "username": "grace",
            "contributions": 90,
            "issues": 4,
            "pullRequests": 30,
            "classification": "maintainer"
        }
    ],
    "tasks": [
        {
            "id": "t1",
            "title": "Port the compiler",
            "priority": "medium",
            "status": "in-progress",
            "labels": ["compiler", "compiler"]
        }
    ]
}"#;

/// Scratch directory removed when dropped.
struct ScratchDir {
    path: Utf8PathBuf,
}

impl ScratchDir {
    fn write(&self, file_name: &str, contents: &str) -> Utf8PathBuf {
        let dir = Dir::open_ambient_dir(&self.path, ambient_authority()).expect("open scratch dir");
        dir.write(file_name, contents).expect("write fixture file");
        self.path.join(file_name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let parent = self.path.parent().unwrap_or_else(|| Utf8Path::new("."));
        if let (Ok(dir), Some(name)) = (
            Dir::open_ambient_dir(parent, ambient_authority()),
            self.path.file_name(),
        ) {
            let _ignored = dir.remove_dir_all(name);
        }
    }
}

#[fixture]
fn scratch() -> ScratchDir {
    let root = Utf8PathBuf::try_from(std::env::temp_dir()).expect("temp dir is UTF-8");
    let name = format!("oss-manager-{}", Uuid::new_v4());
    Dir::open_ambient_dir(&root, ambient_authority())
        .expect("open temp dir")
        .create_dir(&name)
        .expect("create scratch dir");
    ScratchDir {
        path: root.join(name),
    }
}

#[rstest]
#[tokio::test]
async fn fixture_file_replaces_the_samples(scratch: ScratchDir) {
    let path = scratch.write("fixtures.json", FIXTURE_JSON);
    let config = AppConfig::instant();
    let fixtures = FixtureSet::load(&path).expect("fixtures load");
    let (contributors, tasks) = fixtures.into_sources(config.contributor_delay, config.task_delay);
    let harness = harness_with_sources(&config, contributors, tasks);

    let submission = harness
        .shell
        .submit("https://github.com/hopper/cobol")
        .await
        .expect("submission succeeds");
    let outcome = submission.loads.wait().await.expect("loads join");

    assert!(matches!(outcome.contributors, LoadOutcome::Loaded { count: 1 }));
    assert!(matches!(outcome.tasks, LoadOutcome::Loaded { count: 1 }));
    let dashboard = harness.shell.dashboard().expect("dashboard mounted");
    let in_progress = dashboard
        .board()
        .column_tasks(TaskStatus::InProgress)
        .expect("tasks loaded");
    assert_eq!(
        in_progress.first().map(|task| task.labels().len()),
        Some(2)
    );
    assert_eq!(
        dashboard
            .board()
            .column_tasks(TaskStatus::Todo)
            .map(|tasks| tasks.len()),
        Some(0)
    );
}

#[rstest]
fn invalid_fixture_file_reports_the_offending_task(scratch: ScratchDir) {
    let path = scratch.write(
        "fixtures.json",
        r#"{ "tasks": [ { "id": "t1", "title": "x", "priority": "urgent", "status": "todo" } ] }"#,
    );

    let result = FixtureSet::load(&path);

    assert!(matches!(result, Err(FixtureError::Task { index: 0, .. })));
}

#[rstest]
fn missing_fixture_file_names_the_path(scratch: ScratchDir) {
    let path = scratch.path.join("absent.json");

    let err = FixtureSet::load(&path).expect_err("missing file");

    assert!(matches!(&err, FixtureError::Io { path: reported, .. } if *reported == path));
}
