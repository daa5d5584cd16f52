//! Shared world state for repository selection BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use oss_manager::{
    config::AppConfig,
    contributor::{adapters as contributor_samples, domain::ContributorRecord},
    notification::adapters::InMemoryNotificationCenter,
    repository::{
        adapters::{SimulatedConnector, SimulatedOutcome},
        domain::RepositoryReference,
        services::RepositorySelector,
    },
    shell::services::{DashboardOutcome, Shell, ShellError},
    task::{adapters as task_samples, domain::TaskRecord},
    view::adapters::StaticSource,
};
use rstest::fixture;

/// Shell type used by the BDD world.
pub type TestShell = Shell<
    SimulatedConnector,
    DefaultClock,
    StaticSource<ContributorRecord>,
    StaticSource<TaskRecord>,
>;

/// Scenario world for repository selection behaviour tests.
pub struct SelectionWorld {
    pub shell: TestShell,
    pub center: InMemoryNotificationCenter,
    pub last_result: Option<Result<RepositoryReference, ShellError>>,
    pub last_outcome: Option<DashboardOutcome>,
}

impl SelectionWorld {
    /// Creates a world whose connections end with `outcome`.
    ///
    /// # Panics
    ///
    /// Panics if the built-in samples fail validation.
    #[must_use]
    pub fn with_outcome(outcome: SimulatedOutcome) -> Self {
        let config = AppConfig::instant();
        let center = InMemoryNotificationCenter::new();
        let selector = RepositorySelector::new(
            Arc::new(SimulatedConnector::new(config.selector_delay).with_outcome(outcome)),
            Arc::new(center.clone()),
            Arc::new(DefaultClock),
        );
        let shell = Shell::new(
            selector,
            Arc::new(
                contributor_samples::sample_source(config.contributor_delay)
                    .expect("sample contributors are valid"),
            ),
            Arc::new(
                task_samples::sample_source(config.task_delay).expect("sample tasks are valid"),
            ),
            config.theme,
        );

        Self {
            shell,
            center,
            last_result: None,
            last_outcome: None,
        }
    }
}

impl Default for SelectionWorld {
    fn default() -> Self {
        Self::with_outcome(SimulatedOutcome::Succeed)
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SelectionWorld {
    SelectionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
