use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use slipgrid_mdp::{Action, Cell, GridState, GridWorld};

/// Decision rule mapping the current state to one legal action.
///
/// Policies hold no state across calls; all randomness comes from the
/// supplied RNG so trials replay exactly from a seed.
pub trait Policy {
    /// Short name used in reports and error messages.
    fn name(&self) -> &'static str;

    /// Choose one action out of `mdp.actions(state)`.
    fn decide(&self, mdp: &GridWorld, state: GridState, rng: &mut ChaCha8Rng) -> Action;
}

#[derive(Debug, Clone, Copy, Default)]
/// Uniform choice over the legal actions of the current state.
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&self, mdp: &GridWorld, state: GridState, rng: &mut ChaCha8Rng) -> Action {
        let actions = mdp.actions(state);
        actions[rng.gen_range(0..actions.len())]
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Walk down, then right, skipping moves whose intended cell is a hole.
///
/// The rule inspects intended cells only and ignores that actual motion may
/// slip sideways; that simplification is part of the policy's definition.
/// Boxed-in, terminal, and absorbing states fall back to the first legal
/// action. Never consults the RNG.
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn decide(&self, mdp: &GridWorld, state: GridState, _rng: &mut ChaCha8Rng) -> Action {
        let actions = mdp.actions(state);

        if let GridState::Cell { row, col } = state {
            if !mdp.is_terminal(state) {
                if mdp.cell(row + 1, col).is_some_and(|cell| cell != Cell::Hole) {
                    return Action::Down;
                }
                if mdp.cell(row, col + 1).is_some_and(|cell| cell != Cell::Hole) {
                    return Action::Right;
                }
            }
        }

        actions[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Selector for the built-in policies. The evaluator uses it to build a
/// fresh instance per trial.
pub enum PolicyKind {
    Random,
    Greedy,
}

impl PolicyKind {
    /// Construct a fresh policy instance of this kind.
    pub fn build(self) -> Box<dyn Policy> {
        match self {
            PolicyKind::Random => Box::new(RandomPolicy),
            PolicyKind::Greedy => Box::new(GreedyPolicy),
        }
    }

    /// The policy name, identical to `Policy::name` of the built instance.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Random => "random",
            PolicyKind::Greedy => "greedy",
        }
    }
}
