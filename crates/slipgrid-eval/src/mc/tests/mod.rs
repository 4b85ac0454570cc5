use rand_chacha::ChaCha8Rng;
use slipgrid_mdp::{Action, GridSpec, GridState, GridWorld};

use crate::mc::policy::Policy;

mod property_grid_tests;
mod report_tests;

/// The canonical 4x4 map: start in the top-left corner, goal in the
/// bottom-right, holes in between.
pub(crate) fn lake4x4() -> GridWorld {
    GridSpec::from_rows(["SFFF", "FHFH", "FFFH", "HFFG"])
        .compile()
        .expect("canonical map compiles")
}

/// Test policy that returns the same action unconditionally, legal or not.
pub(crate) struct FixedPolicy(pub Action);

impl Policy for FixedPolicy {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn decide(&self, _mdp: &GridWorld, _state: GridState, _rng: &mut ChaCha8Rng) -> Action {
        self.0
    }
}
