use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use slipgrid_mdp::GridWorld;

use crate::mc::{
    error::EvalError,
    policy::PolicyKind,
    trial::{TerminalKind, TrialParams, TrialResult, run_trial},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Aggregate statistics over a batch of independent trials. Immutable once
/// returned.
pub struct EvalSummary {
    pub n_trials: usize,
    pub mean_utility: f64,
    /// Population variance of trial utilities (divisor `n_trials`).
    pub utility_variance: f64,
    pub p_goal: f64,
    pub p_hole: f64,
    pub p_none: f64,
    pub mean_length: f64,
}

#[derive(Debug, Clone, Default)]
/// Accumulates per-trial results during an evaluation run.
pub(crate) struct TrialTally {
    utilities: Vec<f64>,
    length_sum: usize,
    goals: usize,
    holes: usize,
    unfinished: usize,
}

impl TrialTally {
    pub(crate) fn record(&mut self, result: &TrialResult) {
        self.utilities.push(result.utility);
        self.length_sum += result.length;
        match result.terminal {
            TerminalKind::Goal => self.goals += 1,
            TerminalKind::Hole => self.holes += 1,
            TerminalKind::None => self.unfinished += 1,
        }
    }

    pub(crate) fn summarize(&self) -> EvalSummary {
        let n = self.utilities.len() as f64;
        let mean_utility = self.utilities.iter().sum::<f64>() / n;
        let utility_variance = self
            .utilities
            .iter()
            .map(|utility| (utility - mean_utility) * (utility - mean_utility))
            .sum::<f64>()
            / n;

        EvalSummary {
            n_trials: self.utilities.len(),
            mean_utility,
            utility_variance,
            p_goal: self.goals as f64 / n,
            p_hole: self.holes as f64 / n,
            p_none: self.unfinished as f64 / n,
            mean_length: self.length_sum as f64 / n,
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Monte Carlo evaluator running seeded independent trials over one model.
pub struct Evaluator<'a> {
    mdp: &'a GridWorld,
    params: TrialParams,
}

impl<'a> Evaluator<'a> {
    pub fn new(mdp: &'a GridWorld, gamma: f64, step_limit: usize) -> Self {
        Self {
            mdp,
            params: TrialParams { gamma, step_limit },
        }
    }

    /// Run one trial with a fresh policy instance and its own seeded RNG.
    pub fn run_trial(&self, kind: PolicyKind, seed: u64) -> Result<TrialResult, EvalError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let policy = kind.build();
        run_trial(self.mdp, policy.as_ref(), &mut rng, self.params)
    }

    /// Run `trials` independent trials seeded `base_seed, base_seed + 1, …`
    /// and aggregate them. Two calls with identical arguments produce
    /// bit-identical summaries.
    pub fn evaluate(
        &self,
        kind: PolicyKind,
        trials: usize,
        base_seed: u64,
    ) -> Result<EvalSummary, EvalError> {
        self.evaluate_with_hook(kind, trials, base_seed, |_| {})
    }

    /// Evaluate and invoke a callback after each completed trial.
    ///
    /// Either all trials complete or the whole call fails; there is no
    /// partial-result summary.
    pub fn evaluate_with_hook<F>(
        &self,
        kind: PolicyKind,
        trials: usize,
        base_seed: u64,
        mut on_trial: F,
    ) -> Result<EvalSummary, EvalError>
    where
        F: FnMut(&TrialResult),
    {
        if trials == 0 {
            return Err(EvalError::NoTrials);
        }

        let mut tally = TrialTally::default();
        for i in 0..trials {
            let result = self.run_trial(kind, base_seed.wrapping_add(i as u64))?;
            on_trial(&result);
            tally.record(&result);
        }

        Ok(tally.summarize())
    }
}
