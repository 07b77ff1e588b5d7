//! Match configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("legal range upper bound must be at least 1")]
    ZeroRange,

    #[error("a match needs at least one round")]
    ZeroRounds,
}

/// Configuration for a 1v1 match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Bids are legal in `[1, n]`
    pub n: u32,
    /// How many times the game is repeated
    pub rounds: u32,
    /// Emit one report line per round
    #[serde(default)]
    pub verbose: bool,
}

impl MatchConfig {
    pub fn new(n: u32, rounds: u32) -> Result<Self, ConfigError> {
        let config = Self { n, rounds, verbose: false };
        config.validate()?;
        Ok(config)
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n < 1 {
            return Err(ConfigError::ZeroRange);
        }
        if self.rounds < 1 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }
}
