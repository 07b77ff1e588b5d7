//! Serializable descriptions of the built-in strategies

use serde::{Deserialize, Serialize};
use thiserror::Error;
use bid_engine::{Bid, Decision, Strategy};
use crate::basic::{FixedBid, RandomBid, Undercut};
use crate::scripted::Scripted;
use crate::switcher::LowBidSwitcher;

#[derive(Debug, Error)]
pub enum KindError {
    #[error("invalid strategy description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fixed bid must be at least 1")]
    ZeroBid,
}

/// A built-in strategy and its parameters
///
/// JSON form is externally tagged: `{"Fixed": {"bid": 2}}`, `"Undercut"`,
/// `{"Random": {"seed": 7}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Same bid every round.
    Fixed { bid: Bid },
    /// Uniform random bid each round.
    Random { seed: u64 },
    /// One below the opponent's last bid.
    Undercut,
    /// Low random bids, floor bid after three low opponent bids.
    LowBidSwitcher { seed: u64 },
    /// Pre-recorded decisions, cycled.
    Scripted { name: String, script: Vec<Decision> },
}

impl StrategyKind {
    pub fn from_json(json: &str) -> Result<Self, KindError> {
        let kind: StrategyKind = serde_json::from_str(json)?;
        if let StrategyKind::Fixed { bid: 0 } = kind {
            return Err(KindError::ZeroBid);
        }
        Ok(kind)
    }

    /// A fresh instance, owned by the caller
    pub fn build(&self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Fixed { bid } => Box::new(FixedBid::new(*bid)),
            StrategyKind::Random { seed } => Box::new(RandomBid::new(*seed)),
            StrategyKind::Undercut => Box::new(Undercut::new()),
            StrategyKind::LowBidSwitcher { seed } => Box::new(LowBidSwitcher::new(*seed)),
            StrategyKind::Scripted { name, script } => Box::new(Scripted::new(name.clone(), script.clone())),
        }
    }

    /// Human-readable description
    pub fn describe(&self) -> String {
        match self {
            StrategyKind::Fixed { bid } => format!("Always bids {}.", bid),
            StrategyKind::Random { .. } => "Bids uniformly at random each round.".to_string(),
            StrategyKind::Undercut => {
                "Opens with the highest bid, then bids one below the opponent's last bid.".to_string()
            }
            StrategyKind::LowBidSwitcher { .. } => {
                "Bids 1-3 at random; bids 1 after three low opponent bids until a high one.".to_string()
            }
            StrategyKind::Scripted { script, .. } => {
                format!("Replays a script of {} decisions.", script.len())
            }
        }
    }
}
