use std::fmt;

use slipgrid_mdp::{Action, GridError, GridState};

/// Error type for trial simulation and Monte Carlo evaluation.
#[derive(Debug)]
pub enum EvalError {
    /// The grid model rejected a query during simulation.
    Model(GridError),
    /// A policy returned an action that is not legal for the current state.
    /// This is a programming error in the policy, not a runtime condition.
    PolicyContract {
        policy: &'static str,
        state: GridState,
        action: Action,
    },
    /// Evaluation was requested with zero trials.
    NoTrials,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Model(err) => write!(f, "grid model error: {err}"),
            EvalError::PolicyContract {
                policy,
                state,
                action,
            } => write!(
                f,
                "policy '{policy}' chose illegal action {action} in state {state}"
            ),
            EvalError::NoTrials => write!(f, "evaluation requires at least one trial"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<GridError> for EvalError {
    fn from(err: GridError) -> Self {
        EvalError::Model(err)
    }
}
