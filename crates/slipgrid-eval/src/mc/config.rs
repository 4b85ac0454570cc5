use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

const DEFAULT_EVAL_CONFIG_YAML: &str = include_str!("../../config/eval.default.yaml");

/// Evaluation configuration: trial count, seeding, step bound, and the
/// discount factors to sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub trials: usize,
    pub base_seed: u64,
    pub step_limit: usize,
    pub gammas: Vec<f64>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            trials: 100,
            base_seed: 123,
            step_limit: 100,
            gammas: vec![0.5, 0.9, 1.0],
        }
    }
}

impl EvalConfig {
    /// Parse an evaluation config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EvalConfigError> {
        let config: EvalConfig = serde_yaml::from_str(yaml).map_err(EvalConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an evaluation config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, EvalConfigError> {
        let yaml = fs::read_to_string(path).map_err(EvalConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_EVAL_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, EvalConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    fn validate(&self) -> Result<(), EvalConfigError> {
        if self.trials == 0 {
            return Err(EvalConfigError::Invalid(
                "trials must be greater than 0".to_string(),
            ));
        }
        if self.step_limit == 0 {
            return Err(EvalConfigError::Invalid(
                "step_limit must be greater than 0".to_string(),
            ));
        }
        if self.gammas.is_empty() {
            return Err(EvalConfigError::Invalid(
                "gammas must contain at least one discount factor".to_string(),
            ));
        }
        for &gamma in &self.gammas {
            if !gamma.is_finite() || gamma <= 0.0 || gamma > 1.0 {
                return Err(EvalConfigError::Invalid(format!(
                    "gamma must be finite and in (0, 1], got {gamma}"
                )));
            }
        }
        Ok(())
    }
}

/// Error type for loading and validating `EvalConfig`.
#[derive(Debug)]
pub enum EvalConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for EvalConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            EvalConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            EvalConfigError::Invalid(err) => write!(f, "invalid evaluation config: {err}"),
        }
    }
}

impl std::error::Error for EvalConfigError {}
