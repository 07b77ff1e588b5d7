//! Stateless and near-stateless strategies

use anyhow::bail;
use bid_engine::{Bid, Decision, Observation, RoundResult, Strategy};
use crate::random::BidRng;

/// Always bids the same value, clamped to the match's range
#[derive(Clone, Debug)]
pub struct FixedBid {
    bid: Bid,
    n: u32,
    name: String,
}

impl FixedBid {
    pub fn new(bid: Bid) -> Self {
        Self { bid, n: 0, name: format!("Fixed({})", bid) }
    }
}

impl Strategy for FixedBid {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, n: u32) -> anyhow::Result<()> {
        self.n = n;
        Ok(())
    }

    fn decide(&mut self, _obs: &Observation<'_>) -> anyhow::Result<Decision> {
        if self.n == 0 {
            bail!("decide called before initialize");
        }
        Ok(self.bid.clamp(1, self.n).into())
    }

    fn observe(&mut self, _result: &RoundResult<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Uniformly random bid every round
#[derive(Clone, Debug)]
pub struct RandomBid {
    rng: BidRng,
    n: u32,
}

impl RandomBid {
    pub fn new(seed: u64) -> Self {
        Self { rng: BidRng::new(seed), n: 0 }
    }
}

impl Strategy for RandomBid {
    fn name(&self) -> &str {
        "RandomBid"
    }

    fn initialize(&mut self, n: u32) -> anyhow::Result<()> {
        self.n = n;
        self.rng.reseed();
        Ok(())
    }

    fn decide(&mut self, _obs: &Observation<'_>) -> anyhow::Result<Decision> {
        if self.n == 0 {
            bail!("decide called before initialize");
        }
        Ok(self.rng.bid(self.n).into())
    }

    fn observe(&mut self, _result: &RoundResult<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Opens at the top of the range, then bids one below the opponent's last bid
#[derive(Clone, Debug, Default)]
pub struct Undercut {
    n: u32,
    last_seen: Option<Bid>,
}

impl Undercut {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for Undercut {
    fn name(&self) -> &str {
        "Undercut"
    }

    fn initialize(&mut self, n: u32) -> anyhow::Result<()> {
        self.n = n;
        self.last_seen = None;
        Ok(())
    }

    fn decide(&mut self, _obs: &Observation<'_>) -> anyhow::Result<Decision> {
        if self.n == 0 {
            bail!("decide called before initialize");
        }
        let bid = match self.last_seen {
            None => self.n,
            Some(opp) => opp.saturating_sub(1).max(1),
        };
        Ok(bid.into())
    }

    fn observe(&mut self, result: &RoundResult<'_>) -> anyhow::Result<()> {
        self.last_seen = Some(result.opponent_bid);
        Ok(())
    }
}
