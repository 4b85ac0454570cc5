mod error;
mod io;
mod model;
mod spec;

pub use error::GridError;
pub use io::{compile_yaml, load_yaml, save_yaml};
pub use model::{
    Action, Cell, DEFAULT_STEP_REWARD, GridState, GridWorld, P_INTENDED, P_LATERAL,
    PROB_TOLERANCE, REWARD_GOAL, REWARD_HOLE,
};
pub use spec::GridSpec;
