use serde::{Deserialize, Serialize};

use crate::{GridError, GridWorld, model::Cell};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable grid schema used for YAML IO and validation.
pub struct GridSpec {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Grid rows top-first, one cell tag per column, tags in `{S, F, H, G}`.
    pub rows: Vec<String>,
    /// Entry reward for start and frozen cells. Defaults to
    /// `DEFAULT_STEP_REWARD` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_reward: Option<f64>,
}

impl GridSpec {
    /// Build a spec from row strings, using the default step reward.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GridSpec {
            version: Some(1),
            rows: rows.into_iter().map(Into::into).collect(),
            step_reward: None,
        }
    }

    /// Replace the entry reward for non-terminal cells.
    pub fn with_step_reward(mut self, step_reward: f64) -> Self {
        self.step_reward = Some(step_reward);
        self
    }

    /// Validate grid geometry, cell tags, and the start-cell invariant.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows.is_empty() || self.rows[0].is_empty() {
            return Err(GridError::EmptyGrid);
        }

        let expected = self.rows[0].chars().count();
        let mut start = None;

        for (row, line) in self.rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }

            for (col, tag) in line.chars().enumerate() {
                match Cell::from_tag(tag) {
                    None => return Err(GridError::UnknownTag { row, col, tag }),
                    Some(Cell::Start) => {
                        if start.replace((row, col)).is_some() {
                            return Err(GridError::DuplicateStart { row, col });
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        if start.is_none() {
            return Err(GridError::MissingStart);
        }

        if let Some(value) = self.step_reward {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::InvalidStepReward { value });
            }
        }

        Ok(())
    }

    /// Compile this spec into the runtime representation.
    pub fn compile(&self) -> Result<GridWorld, GridError> {
        GridWorld::from_spec(self)
    }
}
