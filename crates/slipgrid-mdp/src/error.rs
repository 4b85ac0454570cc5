use thiserror::Error;

use crate::model::{Action, GridState};

#[derive(Debug, Error)]
/// Error type for grid loading, validation, and model queries.
pub enum GridError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("grid must contain at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell tag '{tag}' at ({row}, {col})")]
    UnknownTag { row: usize, col: usize, tag: char },

    #[error("grid has no start cell")]
    MissingStart,

    #[error("second start cell at ({row}, {col})")]
    DuplicateStart { row: usize, col: usize },

    #[error("step reward must be finite and non-negative, got {value}")]
    InvalidStepReward { value: f64 },

    #[error("coordinate ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("action {action} is not legal in state {state}")]
    IllegalAction { state: GridState, action: Action },
}
