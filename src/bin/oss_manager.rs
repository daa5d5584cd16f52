//! Command-line front end for the repository dashboard.
//!
//! Usage:
//!
//! ```text
//! oss-manager [OPTIONS] [URL]...
//! ```
//!
//! Every URL is submitted to the repository selector in order. When no URL
//! is given, lines read from standard input are submitted one by one. After
//! each submission the published notifications are printed, the dashboard
//! loads are awaited, and the dashboard is rendered to standard output.
//!
//! Configuration comes from `OSM_*` environment variables; flags override
//! them. Logs go to standard error and honour `RUST_LOG`.

use camino::Utf8PathBuf;
use clap::Parser;
use mockable::DefaultClock;
use oss_manager::{
    config::{AppConfig, ConfigError},
    contributor::{
        adapters as contributor_samples,
        domain::{ContributorDomainError, ContributorRecord},
    },
    fixtures::{FixtureError, FixtureSet},
    notification::adapters::InMemoryNotificationCenter,
    render::services::{DashboardRenderer, RenderError},
    repository::{adapters::SimulatedConnector, services::RepositorySelector},
    shell::{
        domain::{ParseThemeError, Theme},
        services::{Shell, ShellError},
    },
    task::{
        adapters as task_samples,
        domain::{TaskDomainError, TaskRecord},
    },
    view::adapters::StaticSource,
};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type AppShell = Shell<
    SimulatedConnector,
    DefaultClock,
    StaticSource<ContributorRecord>,
    StaticSource<TaskRecord>,
>;

/// Errors that end the program.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fixtures(#[from] FixtureError),
    #[error("invalid sample contributor: {0}")]
    Contributor(#[from] ContributorDomainError),
    #[error("invalid sample task: {0}")]
    Task(#[from] TaskDomainError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Shell(#[from] ShellError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Submit GitHub repository URLs and render the resulting dashboard.
#[derive(Debug, Parser)]
#[command(name = "oss-manager", version, about)]
struct Cli {
    /// Repository URLs to submit in order; read from stdin when omitted.
    urls: Vec<String>,

    /// JSON fixture file replacing the sample contributors and tasks.
    #[arg(long, value_name = "FILE")]
    fixtures: Option<Utf8PathBuf>,

    /// Initial theme.
    #[arg(long, value_name = "light|dark", value_parser = parse_theme)]
    theme: Option<Theme>,

    /// Toggle the theme once before the first submission.
    #[arg(long)]
    toggle_theme: bool,

    /// Make every repository connection fail.
    #[arg(long)]
    simulate_failure: bool,

    /// Skip all simulated delays.
    #[arg(long)]
    instant: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

impl Cli {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if self.instant {
            let instant = AppConfig::instant();
            config.selector_delay = instant.selector_delay;
            config.contributor_delay = instant.contributor_delay;
            config.task_delay = instant.task_delay;
        }
        if let Some(path) = &self.fixtures {
            config.fixtures = Some(path.clone());
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.simulate_failure {
            config.simulate_failure = true;
        }
        if let Some(filter) = &self.log {
            config.log_filter.clone_from(filter);
        }
        config
    }
}

fn parse_theme(value: &str) -> Result<Theme, ParseThemeError> {
    Theme::try_from(value)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ignored = writeln!(io::stderr().lock(), "error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.apply(AppConfig::from_env()?);
    init_tracing(&config.log_filter);
    debug!(?config, "configuration loaded");

    let center = InMemoryNotificationCenter::new();
    let shell = build_shell(&config, &center)?;
    let renderer = DashboardRenderer::new()?;

    if cli.toggle_theme {
        shell.toggle_theme();
    }

    if cli.urls.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            process(&shell, &center, &renderer, &line).await?;
        }
    } else {
        for url in &cli.urls {
            process(&shell, &center, &renderer, url).await?;
        }
    }
    Ok(())
}

fn init_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn build_shell(
    config: &AppConfig,
    center: &InMemoryNotificationCenter,
) -> Result<AppShell, CliError> {
    let (contributors, tasks) = match &config.fixtures {
        Some(path) => {
            FixtureSet::load(path)?.into_sources(config.contributor_delay, config.task_delay)
        }
        None => (
            contributor_samples::sample_source(config.contributor_delay)?,
            task_samples::sample_source(config.task_delay)?,
        ),
    };
    let connector =
        SimulatedConnector::new(config.selector_delay).with_outcome(config.connect_outcome());
    let selector = RepositorySelector::new(
        Arc::new(connector),
        Arc::new(center.clone()),
        Arc::new(DefaultClock),
    );
    Ok(Shell::new(
        selector,
        Arc::new(contributors),
        Arc::new(tasks),
        config.theme,
    ))
}

async fn process(
    shell: &AppShell,
    center: &InMemoryNotificationCenter,
    renderer: &DashboardRenderer,
    raw_input: &str,
) -> Result<(), CliError> {
    let submitted = shell.submit(raw_input).await;
    write_notifications(center)?;

    match submitted {
        Ok(submission) => {
            let outcome = submission.loads.wait().await?;
            info!(
                repository = %submission.repository,
                contributors = ?outcome.contributors,
                tasks = ?outcome.tasks,
                "dashboard loaded"
            );
        }
        Err(ShellError::Selection(err)) => debug!(error = %err, "submission rejected"),
        Err(err) => return Err(err.into()),
    }

    let text = renderer.render(&shell.snapshot())?;
    let mut out = io::stdout().lock();
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

fn write_notifications(center: &InMemoryNotificationCenter) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for notification in center.drain() {
        let marker = if notification.is_destructive() { '!' } else { '*' };
        writeln!(
            out,
            "{marker} {}: {}",
            notification.title(),
            notification.description()
        )?;
    }
    Ok(())
}
