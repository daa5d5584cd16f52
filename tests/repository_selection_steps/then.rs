//! Then steps for repository selection BDD scenarios.

use super::world::SelectionWorld;
use oss_manager::{
    repository::{domain::RepositoryReferenceError, services::SelectionError},
    task::domain::TaskStatus,
};
use rstest_bdd_macros::then;

fn rejection(world: &SelectionWorld) -> Result<&SelectionError, eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no submission in scenario world"))?;
    match result {
        Ok(repository) => Err(eyre::eyre!("expected a rejection, {repository} was accepted")),
        Err(err) => err
            .selection()
            .ok_or_else(|| eyre::eyre!("expected a selection error, got {err}")),
    }
}

#[then(r#"the selected repository is "{url}""#)]
fn selected_repository_is(world: &SelectionWorld, url: String) -> Result<(), eyre::Report> {
    let selected = world.shell.selected_repository();
    if selected.as_ref().map(|repository| repository.as_str()) != Some(url.as_str()) {
        return Err(eyre::eyre!("expected {url} to be selected, found {selected:?}"));
    }
    Ok(())
}

#[then("no repository is selected")]
fn nothing_selected(world: &SelectionWorld) -> Result<(), eyre::Report> {
    if let Some(selected) = world.shell.selected_repository() {
        return Err(eyre::eyre!("expected no selection, found {selected}"));
    }
    if world.shell.dashboard().is_some() {
        return Err(eyre::eyre!("dashboard is mounted without a selection"));
    }
    Ok(())
}

#[then(r#"the latest notification is "{title}""#)]
fn latest_notification_is(world: &SelectionWorld, title: String) -> Result<(), eyre::Report> {
    let latest = world
        .center
        .latest()
        .ok_or_else(|| eyre::eyre!("no notification was published"))?;
    if latest.title() != title {
        return Err(eyre::eyre!(
            "expected notification {title:?}, found {:?}",
            latest.title()
        ));
    }
    Ok(())
}

#[then("the latest notification is destructive")]
fn latest_notification_is_destructive(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let latest = world
        .center
        .latest()
        .ok_or_else(|| eyre::eyre!("no notification was published"))?;
    if !latest.is_destructive() {
        return Err(eyre::eyre!("expected a destructive notification"));
    }
    Ok(())
}

#[then("the dashboard shows {count:u64} contributors")]
fn dashboard_shows_contributors(world: &SelectionWorld, count: u64) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no dashboard loads were awaited"))?;
    if !outcome.contributors.is_loaded() {
        return Err(eyre::eyre!("contributor load ended with {:?}", outcome.contributors));
    }
    let dashboard = world
        .shell
        .dashboard()
        .ok_or_else(|| eyre::eyre!("dashboard is not mounted"))?;
    let shown = dashboard
        .registry()
        .count()
        .ok_or_else(|| eyre::eyre!("contributors are not loaded"))?;
    if u64::try_from(shown)? != count {
        return Err(eyre::eyre!("expected {count} contributors, found {shown}"));
    }
    Ok(())
}

#[then("each board column holds {count:u64} task")]
fn each_column_holds(world: &SelectionWorld, count: u64) -> Result<(), eyre::Report> {
    let dashboard = world
        .shell
        .dashboard()
        .ok_or_else(|| eyre::eyre!("dashboard is not mounted"))?;
    let columns = dashboard
        .board()
        .columns()
        .ok_or_else(|| eyre::eyre!("tasks are not loaded"))?;
    let statuses: Vec<TaskStatus> = columns.iter().map(|column| column.status()).collect();
    if statuses != TaskStatus::ALL {
        return Err(eyre::eyre!("unexpected column order {statuses:?}"));
    }
    for column in &columns {
        if u64::try_from(column.count())? != count {
            return Err(eyre::eyre!(
                "expected {count} tasks in {}, found {}",
                column.title(),
                column.count()
            ));
        }
    }
    Ok(())
}

#[then("the submission is rejected as an invalid URL")]
fn rejected_as_invalid(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let err = rejection(world)?;
    if !matches!(
        err,
        SelectionError::Reference(RepositoryReferenceError::InvalidFormat(_))
    ) {
        return Err(eyre::eyre!("expected InvalidFormat, got {err:?}"));
    }
    Ok(())
}

#[then("the submission is rejected as empty input")]
fn rejected_as_empty(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let err = rejection(world)?;
    if !matches!(
        err,
        SelectionError::Reference(RepositoryReferenceError::EmptyInput)
    ) {
        return Err(eyre::eyre!("expected EmptyInput, got {err:?}"));
    }
    Ok(())
}

#[then("the submission is rejected as a connection failure")]
fn rejected_as_connection_failure(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let err = rejection(world)?;
    if !matches!(err, SelectionError::ConnectionFailed { .. }) {
        return Err(eyre::eyre!("expected ConnectionFailed, got {err:?}"));
    }
    Ok(())
}
