mod mc;

pub use mc::config::{EvalConfig, EvalConfigError};
pub use mc::error::EvalError;
pub use mc::evaluate::{EvalSummary, Evaluator};
pub use mc::policy::{GreedyPolicy, Policy, PolicyKind, RandomPolicy};
pub use mc::report::{EvalReport, GammaReport, evaluate_report};
pub use mc::trial::{TerminalKind, TrialParams, TrialResult, run_trial};
