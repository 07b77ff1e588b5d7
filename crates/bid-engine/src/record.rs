//! What a strategy sees before and after each round

use serde::Serialize;
use crate::action::Bid;

/// Pre-round view handed to `decide`
///
/// Both histories cover rounds `1..round` and never the round being decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Observation<'a> {
    /// Upper bound of the legal range
    pub n: u32,
    /// 1-based index of the round about to be played
    pub round: u32,
    pub own_name: &'a str,
    pub opponent_name: &'a str,
    pub own_history: &'a [Bid],
    pub opponent_history: &'a [Bid],
}

impl<'a> Observation<'a> {
    /// Opponent's most recent bid, if any round has been played
    pub fn opponent_last(&self) -> Option<Bid> {
        self.opponent_history.last().copied()
    }

    pub fn own_last(&self) -> Option<Bid> {
        self.own_history.last().copied()
    }
}

/// Post-round view handed to `observe`
///
/// Carries the round just played and nothing else; running totals stay
/// with the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoundResult<'a> {
    pub n: u32,
    pub round: u32,
    pub own_name: &'a str,
    pub opponent_name: &'a str,
    pub own_bid: Bid,
    pub opponent_bid: Bid,
    pub own_payoff: u32,
    pub opponent_payoff: u32,
}

impl<'a> RoundResult<'a> {
    /// The same round seen from the other seat
    pub fn mirrored(&self) -> RoundResult<'a> {
        RoundResult {
            n: self.n,
            round: self.round,
            own_name: self.opponent_name,
            opponent_name: self.own_name,
            own_bid: self.opponent_bid,
            opponent_bid: self.own_bid,
            own_payoff: self.opponent_payoff,
            opponent_payoff: self.own_payoff,
        }
    }

    pub fn won(&self) -> bool {
        self.own_bid < self.opponent_bid
    }
}
