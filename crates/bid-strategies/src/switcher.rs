//! Two-state strategy driven by the opponent's recent bids

use std::collections::VecDeque;

use anyhow::bail;
use bid_engine::{Bid, Decision, Observation, RoundResult, Strategy};
use crate::random::BidRng;

/// Opponent bids at or below this count as low
const LOW_BID: Bid = 2;

/// How many opponent bids the window keeps
const WINDOW: usize = 3;

/// Cumulative probabilities for bidding 1, 2, then 3
const LOW_BIAS: [(f64, Bid); 2] = [(0.15, 1), (0.65, 2)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Bid 1..=3, weighted toward 2
    Probe,
    /// Bid 1 every round
    Floor,
}

/// Probes with low random bids, drops to the floor once the opponent has
/// bid low three times running, and goes back to probing on the first
/// high bid it sees.
#[derive(Clone, Debug)]
pub struct LowBidSwitcher {
    rng: BidRng,
    n: u32,
    mode: Mode,
    recent: VecDeque<Bid>,
}

impl LowBidSwitcher {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: BidRng::new(seed),
            n: 0,
            mode: Mode::Probe,
            recent: VecDeque::with_capacity(WINDOW),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn sample_probe(&mut self) -> Bid {
        let x = self.rng.unit();
        LOW_BIAS
            .iter()
            .find(|(cutoff, _)| x < *cutoff)
            .map(|&(_, bid)| bid)
            .unwrap_or(3)
    }
}

impl Strategy for LowBidSwitcher {
    fn name(&self) -> &str {
        "LowBidSwitcher"
    }

    fn initialize(&mut self, n: u32) -> anyhow::Result<()> {
        self.n = n;
        self.mode = Mode::Probe;
        self.recent.clear();
        self.rng.reseed();
        Ok(())
    }

    fn decide(&mut self, obs: &Observation<'_>) -> anyhow::Result<Decision> {
        if self.n == 0 {
            bail!("decide called before initialize");
        }
        let bid = match self.mode {
            Mode::Floor => 1,
            Mode::Probe => self.sample_probe().min(obs.n),
        };
        Ok(bid.into())
    }

    fn observe(&mut self, result: &RoundResult<'_>) -> anyhow::Result<()> {
        if self.recent.len() == WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(result.opponent_bid);

        let next = match self.mode {
            Mode::Probe if self.recent.len() == WINDOW && self.recent.iter().all(|&b| b <= LOW_BID) => {
                Mode::Floor
            }
            Mode::Floor if result.opponent_bid > LOW_BID => Mode::Probe,
            mode => mode,
        };
        if next != self.mode {
            log::debug!("round {}: {:?} -> {:?} against {}", result.round, self.mode, next, result.opponent_name);
            self.mode = next;
        }
        Ok(())
    }
}
