use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use slipgrid_mdp::GridWorld;

use crate::mc::{
    config::EvalConfig,
    error::EvalError,
    evaluate::{EvalSummary, Evaluator},
    policy::PolicyKind,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Side-by-side comparison of the built-in policies for one discount factor.
pub struct GammaReport {
    pub random: EvalSummary,
    pub greedy: EvalSummary,
    pub winner: PolicyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Evaluation report keyed by discount factor.
pub struct EvalReport {
    pub n_trials: usize,
    pub base_seed: u64,
    pub gammas: BTreeMap<String, GammaReport>,
}

/// Pick the winning policy: strictly higher mean utility, then lower
/// utility variance, then the lexically smaller policy name.
pub(crate) fn pick_winner(random: &EvalSummary, greedy: &EvalSummary) -> PolicyKind {
    if greedy.mean_utility != random.mean_utility {
        return if greedy.mean_utility > random.mean_utility {
            PolicyKind::Greedy
        } else {
            PolicyKind::Random
        };
    }

    if greedy.utility_variance != random.utility_variance {
        return if greedy.utility_variance < random.utility_variance {
            PolicyKind::Greedy
        } else {
            PolicyKind::Random
        };
    }

    match PolicyKind::Greedy.name().cmp(PolicyKind::Random.name()) {
        Ordering::Less | Ordering::Equal => PolicyKind::Greedy,
        Ordering::Greater => PolicyKind::Random,
    }
}

/// Evaluate both built-in policies for every configured discount factor,
/// reusing the same trial count and base seed per policy.
pub fn evaluate_report(mdp: &GridWorld, config: &EvalConfig) -> Result<EvalReport, EvalError> {
    let mut gammas = BTreeMap::new();

    for &gamma in &config.gammas {
        let evaluator = Evaluator::new(mdp, gamma, config.step_limit);
        let random = evaluator.evaluate(PolicyKind::Random, config.trials, config.base_seed)?;
        let greedy = evaluator.evaluate(PolicyKind::Greedy, config.trials, config.base_seed)?;
        let winner = pick_winner(&random, &greedy);

        gammas.insert(
            format!("{gamma}"),
            GammaReport {
                random,
                greedy,
                winner,
            },
        );
    }

    Ok(EvalReport {
        n_trials: config.trials,
        base_seed: config.base_seed,
        gammas,
    })
}
