//! Errors that end a match

use std::fmt;

use thiserror::Error;
use crate::action::ActionError;
use crate::config::ConfigError;
use crate::strategy::Side;

/// Which strategy operation was running when it failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initialize,
    Decide,
    Observe,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Initialize => write!(f, "initialize"),
            Phase::Decide => write!(f, "decide"),
            Phase::Observe => write!(f, "observe"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    Config(#[from] ConfigError),

    #[error("round {round}: {name} ({side}) made an illegal bid: {source}")]
    IllegalAction {
        side: Side,
        name: String,
        round: u32,
        #[source]
        source: ActionError,
    },

    #[error("{name} ({side}) failed during {phase}")]
    Strategy {
        side: Side,
        name: String,
        phase: Phase,
        #[source]
        source: anyhow::Error,
    },
}

impl MatchError {
    /// The seat at fault, if the failure came from a strategy
    pub fn side(&self) -> Option<Side> {
        match self {
            MatchError::Config(_) => None,
            MatchError::IllegalAction { side, .. } | MatchError::Strategy { side, .. } => Some(*side),
        }
    }

    /// The validation failure, if this was an illegal bid
    pub fn action_error(&self) -> Option<&ActionError> {
        match self {
            MatchError::IllegalAction { source, .. } => Some(source),
            _ => None,
        }
    }
}
