//! Configuration options for the simulator.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::ParseMode;
use crate::eval::Scoring;

/// Trials per query when none is given.
pub const DEFAULT_SIMULATIONS: u64 = 10_000;

/// Largest accepted trial count.
pub const MAX_SIMULATIONS: u64 = 10_000_000;

/// Opponents per query when none is given.
pub const DEFAULT_OPPONENTS: usize = 2;

/// Most opponents a preflop query can seat: 2 hole + 5 board + 2 * 22 = 51.
pub const MAX_OPPONENTS: usize = 22;

/// Configuration for the simulator.
///
/// # Example
/// ```
/// use poker_odds::sim::SimConfig;
///
/// let config = SimConfig::default().with_simulations(5_000).with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of trials per query.
    #[serde(default = "default_simulations")]
    pub simulations: u64,

    /// Opponent count used when a request leaves it out.
    #[serde(default = "default_opponents")]
    pub default_opponents: usize,

    /// How hands are scored at showdown.
    #[serde(default)]
    pub scoring: Scoring,

    /// How card tokens in requests are parsed.
    #[serde(default)]
    pub parse_mode: ParseMode,

    /// Random seed for reproducibility.
    ///
    /// If `None`, every simulator seeds itself from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Trials between cancellation checks and progress reports.
    #[serde(default = "default_cancel_check_interval")]
    pub cancel_check_interval: u64,
}

fn default_simulations() -> u64 {
    DEFAULT_SIMULATIONS
}

fn default_opponents() -> usize {
    DEFAULT_OPPONENTS
}

fn default_cancel_check_interval() -> u64 {
    1024
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            default_opponents: DEFAULT_OPPONENTS,
            scoring: Scoring::default(),
            parse_mode: ParseMode::default(),
            seed: None,
            cancel_check_interval: default_cancel_check_interval(),
        }
    }
}

impl SimConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings matching the legacy web calculator: placeholder scoring,
    /// 10,000 trials, two opponents.
    pub fn legacy() -> Self {
        Self {
            scoring: Scoring::Placeholder,
            ..Default::default()
        }
    }

    /// Builder method: set the trial count.
    pub fn with_simulations(mut self, simulations: u64) -> Self {
        self.simulations = simulations;
        self
    }

    /// Builder method: set the default opponent count.
    pub fn with_default_opponents(mut self, opponents: usize) -> Self {
        self.default_opponents = opponents;
        self
    }

    /// Builder method: set the scoring mode.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Builder method: set the token parse mode.
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the cancellation check interval.
    pub fn with_cancel_check_interval(mut self, trials: u64) -> Self {
        self.cancel_check_interval = trials;
        self
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SIMULATIONS).contains(&self.simulations) {
            return Err(ConfigError::InvalidSimulations(self.simulations));
        }
        if !(1..=MAX_OPPONENTS).contains(&self.default_opponents) {
            return Err(ConfigError::InvalidOpponents(self.default_opponents));
        }
        if self.cancel_check_interval == 0 {
            return Err(ConfigError::InvalidCheckInterval);
        }
        Ok(())
    }
}

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read {0}: {1}")]
    Io(String, String),
    /// The config file is not valid JSON for [`SimConfig`].
    #[error("parse error: {0}")]
    Parse(String),
    /// Trial count outside `1..=MAX_SIMULATIONS`.
    #[error("simulations {0} is out of range [1, {max}]", max = MAX_SIMULATIONS)]
    InvalidSimulations(u64),
    /// Default opponent count outside `1..=MAX_OPPONENTS`.
    #[error("default opponents {0} is out of range [1, {max}]", max = MAX_OPPONENTS)]
    InvalidOpponents(usize),
    /// Check interval of zero.
    #[error("cancel check interval must be at least 1")]
    InvalidCheckInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.simulations, 10_000);
        assert_eq!(config.default_opponents, 2);
        assert_eq!(config.scoring, Scoring::Evaluator);
        assert_eq!(config.parse_mode, ParseMode::Strict);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());

        assert_eq!(SimConfig::legacy().scoring, Scoring::Placeholder);
    }

    #[test]
    fn test_builders() {
        let config = SimConfig::new()
            .with_simulations(500)
            .with_default_opponents(4)
            .with_scoring(Scoring::Placeholder)
            .with_parse_mode(ParseMode::ExpandRanks)
            .with_seed(42)
            .with_cancel_check_interval(10);
        assert_eq!(config.simulations, 500);
        assert_eq!(config.default_opponents, 4);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.cancel_check_interval, 10);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            SimConfig::default().with_simulations(0).validate(),
            Err(ConfigError::InvalidSimulations(0))
        );
        assert_eq!(
            SimConfig::default()
                .with_simulations(MAX_SIMULATIONS + 1)
                .validate(),
            Err(ConfigError::InvalidSimulations(MAX_SIMULATIONS + 1))
        );
        assert_eq!(
            SimConfig::default().with_default_opponents(23).validate(),
            Err(ConfigError::InvalidOpponents(23))
        );
        assert_eq!(
            SimConfig::default().with_cancel_check_interval(0).validate(),
            Err(ConfigError::InvalidCheckInterval)
        );
    }

    #[test]
    fn test_from_json() {
        let config = SimConfig::from_json_str(
            r#"{ "simulations": 2000, "scoring": "placeholder", "seed": 9 }"#,
        )
        .unwrap();
        assert_eq!(config.simulations, 2000);
        assert_eq!(config.scoring, Scoring::Placeholder);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.default_opponents, 2);
        assert_eq!(config.cancel_check_interval, 1024);

        assert!(matches!(
            SimConfig::from_json_str(r#"{ "simulations": 0 }"#),
            Err(ConfigError::InvalidSimulations(0))
        ));
        assert!(matches!(
            SimConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SimConfig::from_json_file("/definitely/not/here.json"),
            Err(ConfigError::Io(..))
        ));
    }
}
