use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use slipgrid_mdp::{Cell, GridState, GridWorld};

use crate::mc::{error::EvalError, policy::Policy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How an episode ended.
pub enum TerminalKind {
    Goal,
    Hole,
    /// The step bound ran out before a terminal cell was entered.
    None,
}

/// Episode parameters controlling discounting and the stopping bound.
#[derive(Debug, Clone, Copy)]
pub struct TrialParams {
    /// Discount factor applied per step, in `(0, 1]`.
    pub gamma: f64,
    /// Hard cap on episode length; the sole non-termination safeguard.
    pub step_limit: usize,
}

/// Outcome of one simulated episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    /// Discounted sum of state-entry rewards.
    pub utility: f64,
    /// Number of steps taken, never above the step limit.
    pub length: usize,
    pub terminal: TerminalKind,
}

/// Run one episode from the start state until a terminal cell or the step
/// bound.
///
/// Each step queries the policy, checks the returned action against the
/// model's legal set, samples one weighted transition outcome, and collects
/// the discounted entry reward of the landing state. Reaching the bound
/// without termination is a defined outcome, not an error.
pub fn run_trial(
    mdp: &GridWorld,
    policy: &dyn Policy,
    rng: &mut ChaCha8Rng,
    params: TrialParams,
) -> Result<TrialResult, EvalError> {
    let mut state = mdp.start_state();
    let mut utility = 0.0;
    let mut discount = 1.0;
    let mut length = 0;
    let mut terminal = TerminalKind::None;

    for _ in 0..params.step_limit {
        let action = policy.decide(mdp, state, rng);
        if !mdp.actions(state).contains(&action) {
            return Err(EvalError::PolicyContract {
                policy: policy.name(),
                state,
                action,
            });
        }

        let sample = (rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0);
        let (next, reward, next_terminal) = mdp.sample_transition(state, action, sample)?;

        utility += discount * reward;
        discount *= params.gamma;
        length += 1;

        if next_terminal {
            terminal = match next {
                GridState::Cell { row, col } => match mdp.cell(row, col) {
                    Some(Cell::Goal) => TerminalKind::Goal,
                    Some(Cell::Hole) => TerminalKind::Hole,
                    _ => TerminalKind::None,
                },
                GridState::Absorbing => TerminalKind::None,
            };
            break;
        }

        state = next;
    }

    Ok(TrialResult {
        utility,
        length,
        terminal,
    })
}
