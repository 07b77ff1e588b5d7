//! The capability every participant implements

use std::fmt;

use serde::{Deserialize, Serialize};
use crate::action::Decision;
use crate::record::{Observation, RoundResult};

/// A seat in a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// A pluggable decision-making unit
///
/// The engine calls exactly these operations, in this order:
/// `initialize` once, then per round `decide` followed by `observe`.
/// Any error returned ends the match.
pub trait Strategy {
    /// Display name, used for reporting only
    fn name(&self) -> &str;

    /// Reset all internal state for a match with bids in `[1, n]`.
    ///
    /// The same instance may be reused for another match only through this call.
    fn initialize(&mut self, n: u32) -> anyhow::Result<()>;

    /// Choose a bid for `obs.round`. The opponent's bid for that round is not visible.
    fn decide(&mut self, obs: &Observation<'_>) -> anyhow::Result<Decision>;

    /// Learn from the round just resolved.
    fn observe(&mut self, result: &RoundResult<'_>) -> anyhow::Result<()>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn initialize(&mut self, n: u32) -> anyhow::Result<()> {
        (**self).initialize(n)
    }

    fn decide(&mut self, obs: &Observation<'_>) -> anyhow::Result<Decision> {
        (**self).decide(obs)
    }

    fn observe(&mut self, result: &RoundResult<'_>) -> anyhow::Result<()> {
        (**self).observe(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo {
        n: u32,
        seen: Vec<u32>,
    }

    impl Strategy for Echo {
        fn name(&self) -> &str {
            "Echo"
        }

        fn initialize(&mut self, n: u32) -> anyhow::Result<()> {
            self.n = n;
            self.seen.clear();
            Ok(())
        }

        fn decide(&mut self, obs: &Observation<'_>) -> anyhow::Result<Decision> {
            Ok(obs.opponent_last().unwrap_or(self.n).into())
        }

        fn observe(&mut self, result: &RoundResult<'_>) -> anyhow::Result<()> {
            self.seen.push(result.opponent_bid);
            Ok(())
        }
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other(), Side::A);
        assert_eq!(Side::A.to_string(), "A");
    }

    #[test]
    fn test_boxed_strategy_forwards() {
        let mut boxed: Box<dyn Strategy> = Box::new(Echo { n: 0, seen: vec![9] });
        boxed.initialize(6).unwrap();
        assert_eq!(boxed.name(), "Echo");

        let obs = Observation {
            n: 6,
            round: 1,
            own_name: "Echo",
            opponent_name: "X",
            own_history: &[],
            opponent_history: &[],
        };
        assert_eq!(boxed.decide(&obs).unwrap(), Decision::Bid(6));
    }
}
