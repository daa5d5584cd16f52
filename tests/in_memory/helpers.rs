//! Shared test helpers for in-memory dashboard integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use oss_manager::{
    config::AppConfig,
    contributor::{adapters as contributor_samples, domain::ContributorRecord},
    notification::adapters::InMemoryNotificationCenter,
    repository::{adapters::SimulatedConnector, services::RepositorySelector},
    shell::services::Shell,
    task::{adapters as task_samples, domain::TaskRecord},
    view::adapters::StaticSource,
};
use rstest::fixture;

/// Shell wired with simulated adapters.
pub type TestShell = Shell<
    SimulatedConnector,
    DefaultClock,
    StaticSource<ContributorRecord>,
    StaticSource<TaskRecord>,
>;

/// Shell and the notification centre it publishes to.
pub struct Harness {
    pub shell: TestShell,
    pub center: InMemoryNotificationCenter,
}

/// Provides the default configuration with its simulated delays.
#[fixture]
pub fn config() -> AppConfig {
    AppConfig::default()
}

/// Provides a shell backed by the built-in samples.
#[fixture]
pub fn harness(config: AppConfig) -> Harness {
    let contributors = contributor_samples::sample_source(config.contributor_delay)
        .expect("sample contributors are valid");
    let tasks = task_samples::sample_source(config.task_delay).expect("sample tasks are valid");
    harness_with_sources(&config, contributors, tasks)
}

/// Builds a shell over the given sources, honouring the configured delays
/// and failure switch.
pub fn harness_with_sources(
    config: &AppConfig,
    contributors: StaticSource<ContributorRecord>,
    tasks: StaticSource<TaskRecord>,
) -> Harness {
    let center = InMemoryNotificationCenter::new();
    let connector =
        SimulatedConnector::new(config.selector_delay).with_outcome(config.connect_outcome());
    let selector = RepositorySelector::new(
        Arc::new(connector),
        Arc::new(center.clone()),
        Arc::new(DefaultClock),
    );
    let shell = Shell::new(
        selector,
        Arc::new(contributors),
        Arc::new(tasks),
        config.theme,
    );
    Harness { shell, center }
}
