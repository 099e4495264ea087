//----------------------------------------
// Calculator configuration
//----------------------------------------
//! Tunables for the t-test search and for range sweeps. The defaults
//! reproduce the calculator's fixed behaviour: candidates 2..100 and
//! 20-point curves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AbcomputeErr;

pub const DEFAULT_MIN_CANDIDATE_N: usize = 2;
pub const DEFAULT_MAX_CANDIDATE_N: usize = 100;
pub const DEFAULT_CURVE_POINTS: usize = 20;

/// Bounds of the linear scan used to invert t-test power.
/// `max_candidate_n` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub min_candidate_n: usize,
    pub max_candidate_n: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            min_candidate_n: DEFAULT_MIN_CANDIDATE_N,
            max_candidate_n: DEFAULT_MAX_CANDIDATE_N,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub search: SearchConfig,
    /// Number of evenly spaced points a swept parameter is expanded into
    pub curve_points: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            search: SearchConfig::default(),
            curve_points: DEFAULT_CURVE_POINTS,
        }
    }
}

impl CalculatorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, AbcomputeErr> {
        let config: CalculatorConfig =
            toml::from_str(s).map_err(|e| ConfigErr::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AbcomputeErr> {
        let SearchConfig {
            min_candidate_n,
            max_candidate_n,
        } = self.search;
        if min_candidate_n == 0 || min_candidate_n >= max_candidate_n {
            return Err(ConfigErr::EmptySearchWindow {
                min_candidate_n,
                max_candidate_n,
            }
            .into());
        }
        if self.curve_points < 2 {
            return Err(ConfigErr::TooFewCurvePoints(self.curve_points).into());
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigErr {
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error(
        "search window [{min_candidate_n}, {max_candidate_n}) is empty or starts at zero"
    )]
    EmptySearchWindow {
        min_candidate_n: usize,
        max_candidate_n: usize,
    },
    #[error("a curve needs at least 2 points; got {0}")]
    TooFewCurvePoints(usize),
}

impl From<ConfigErr> for AbcomputeErr {
    fn from(e: ConfigErr) -> Self {
        AbcomputeErr::Config(e)
    }
}
