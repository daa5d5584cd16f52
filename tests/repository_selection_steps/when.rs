//! When steps for repository selection BDD scenarios.

use super::world::{SelectionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn submit(world: &mut SelectionWorld, raw_input: &str) -> Result<(), eyre::Report> {
    match run_async(world.shell.submit(raw_input)) {
        Ok(submission) => {
            let outcome = run_async(submission.loads.wait()).wrap_err("wait for dashboard loads")?;
            world.last_outcome = Some(outcome);
            world.last_result = Some(Ok(submission.repository));
        }
        Err(err) => world.last_result = Some(Err(err)),
    }
    Ok(())
}

#[when(r#"I submit "{url}""#)]
fn submit_url(world: &mut SelectionWorld, url: String) -> Result<(), eyre::Report> {
    submit(world, &url)
}

#[when("I submit a blank URL")]
fn submit_blank(world: &mut SelectionWorld) -> Result<(), eyre::Report> {
    submit(world, "   ")
}
