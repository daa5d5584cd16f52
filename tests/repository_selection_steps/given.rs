//! Given steps for repository selection BDD scenarios.

use super::world::SelectionWorld;
use oss_manager::repository::adapters::SimulatedOutcome;
use rstest_bdd_macros::given;

#[given("a fresh dashboard")]
fn fresh_dashboard(world: &mut SelectionWorld) {
    *world = SelectionWorld::default();
}

#[given("repository connections fail")]
fn connections_fail(world: &mut SelectionWorld) {
    *world = SelectionWorld::with_outcome(SimulatedOutcome::Fail);
}
