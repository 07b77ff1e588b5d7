//! Match execution engine

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use crate::action::{validate_action, Bid, Decision};
use crate::config::MatchConfig;
use crate::error::{MatchError, Phase};
use crate::payoff;
use crate::record::{Observation, RoundResult};
use crate::report::{LogReporter, RoundReport, RoundReporter};
use crate::strategy::{Side, Strategy};

/// One completed round, seen from seat A then seat B
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub bid_a: Bid,
    pub bid_b: Bid,
    pub payoff_a: u32,
    pub payoff_b: u32,
    pub cumulative_a: u64,
    pub cumulative_b: u64,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub name_a: String,
    pub name_b: String,
    pub rounds: Vec<RoundRecord>,
    pub total_score_a: u64,
    pub total_score_b: u64,
    pub round_count: u32,
}

impl MatchReport {
    pub fn scores(&self) -> (u64, u64) {
        (self.total_score_a, self.total_score_b)
    }

    pub fn history(&self, side: Side) -> Vec<Bid> {
        self.rounds
            .iter()
            .map(|r| match side {
                Side::A => r.bid_a,
                Side::B => r.bid_b,
            })
            .collect()
    }
}

/// A repeated encounter between two strategies under one config
///
/// Owns the running scores and histories; the strategies are borrowed and
/// only ever reached through the [`Strategy`] trait.
pub struct IteratedMatch<'s> {
    a: &'s mut dyn Strategy,
    b: &'s mut dyn Strategy,
    config: MatchConfig,
    reporter: Box<dyn RoundReporter + 's>,
    name_a: String,
    name_b: String,
    history_a: Vec<Bid>,
    history_b: Vec<Bid>,
    records: Vec<RoundRecord>,
    score_a: u64,
    score_b: u64,
}

impl<'s> IteratedMatch<'s> {
    pub fn new(a: &'s mut dyn Strategy, b: &'s mut dyn Strategy, config: MatchConfig) -> Self {
        let name_a = a.name().to_string();
        let name_b = b.name().to_string();
        Self {
            a,
            b,
            config,
            reporter: Box::new(LogReporter),
            name_a,
            name_b,
            history_a: Vec::new(),
            history_b: Vec::new(),
            records: Vec::new(),
            score_a: 0,
            score_b: 0,
        }
    }

    /// Send verbose round lines somewhere other than the log
    pub fn with_reporter(mut self, reporter: impl RoundReporter + 's) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every round and return the final `(score_a, score_b)`
    ///
    /// Match state is rebuilt from scratch on each call. The first error
    /// from validation or from either strategy ends the match; state up to
    /// the last completed round stays readable.
    pub fn run(&mut self) -> Result<(u64, u64), MatchError> {
        self.config.validate()?;
        self.reset();

        let n = self.config.n;
        debug!(
            "match start: {} vs {} (n={}, rounds={})",
            self.name_a, self.name_b, n, self.config.rounds
        );

        self.a
            .initialize(n)
            .map_err(|source| strategy_error(Side::A, &self.name_a, Phase::Initialize, source))?;
        self.b
            .initialize(n)
            .map_err(|source| strategy_error(Side::B, &self.name_b, Phase::Initialize, source))?;

        for round in 1..=self.config.rounds {
            self.play_round(round)?;
        }

        debug!(
            "match end: {} {} - {} {}",
            self.name_a, self.score_a, self.score_b, self.name_b
        );
        Ok((self.score_a, self.score_b))
    }

    fn reset(&mut self) {
        let capacity = self.config.rounds as usize;
        self.name_a = self.a.name().to_string();
        self.name_b = self.b.name().to_string();
        self.history_a = Vec::with_capacity(capacity);
        self.history_b = Vec::with_capacity(capacity);
        self.records = Vec::with_capacity(capacity);
        self.score_a = 0;
        self.score_b = 0;
    }

    fn play_round(&mut self, round: u32) -> Result<(), MatchError> {
        let n = self.config.n;

        // Both views are built from the same pre-round state, so neither
        // decide call can see the other's bid for this round.
        let obs_a = Observation {
            n,
            round,
            own_name: &self.name_a,
            opponent_name: &self.name_b,
            own_history: &self.history_a,
            opponent_history: &self.history_b,
        };
        let obs_b = Observation {
            n,
            round,
            own_name: &self.name_b,
            opponent_name: &self.name_a,
            own_history: &self.history_b,
            opponent_history: &self.history_a,
        };

        let decision_a = self
            .a
            .decide(&obs_a)
            .map_err(|source| strategy_error(Side::A, &self.name_a, Phase::Decide, source))?;
        let decision_b = self
            .b
            .decide(&obs_b)
            .map_err(|source| strategy_error(Side::B, &self.name_b, Phase::Decide, source))?;

        let bid_a = validate(Side::A, &self.name_a, round, &decision_a, n)?;
        let bid_b = validate(Side::B, &self.name_b, round, &decision_b, n)?;

        let (payoff_a, payoff_b) = payoff(bid_a, bid_b);
        self.score_a += payoff_a as u64;
        self.score_b += payoff_b as u64;

        self.history_a.push(bid_a);
        self.history_b.push(bid_b);
        self.records.push(RoundRecord {
            round,
            bid_a,
            bid_b,
            payoff_a,
            payoff_b,
            cumulative_a: self.score_a,
            cumulative_b: self.score_b,
        });
        trace!("round {}: bids ({}, {}) payoffs ({}, {})", round, bid_a, bid_b, payoff_a, payoff_b);

        if self.config.verbose {
            self.reporter.report(&RoundReport {
                round,
                name_a: &self.name_a,
                name_b: &self.name_b,
                bid_a,
                bid_b,
                payoff_a,
                payoff_b,
                total_a: self.score_a,
                total_b: self.score_b,
            });
        }

        let result_a = RoundResult {
            n,
            round,
            own_name: &self.name_a,
            opponent_name: &self.name_b,
            own_bid: bid_a,
            opponent_bid: bid_b,
            own_payoff: payoff_a,
            opponent_payoff: payoff_b,
        };
        let result_b = result_a.mirrored();

        self.a
            .observe(&result_a)
            .map_err(|source| strategy_error(Side::A, &self.name_a, Phase::Observe, source))?;
        self.b
            .observe(&result_b)
            .map_err(|source| strategy_error(Side::B, &self.name_b, Phase::Observe, source))?;

        Ok(())
    }

    pub fn scores(&self) -> (u64, u64) {
        (self.score_a, self.score_b)
    }

    /// Bids recorded for one seat, in round order
    pub fn history(&self, side: Side) -> &[Bid] {
        match side {
            Side::A => &self.history_a,
            Side::B => &self.history_b,
        }
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn rounds_played(&self) -> u32 {
        self.records.len() as u32
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            name_a: self.name_a.clone(),
            name_b: self.name_b.clone(),
            rounds: self.records.clone(),
            total_score_a: self.score_a,
            total_score_b: self.score_b,
            round_count: self.rounds_played(),
        }
    }
}

fn validate(
    side: Side,
    name: &str,
    round: u32,
    decision: &Decision,
    n: u32,
) -> Result<Bid, MatchError> {
    validate_action(decision, n).map_err(|source| {
        debug!("round {}: rejecting bid from {} ({}): {}", round, name, side, source);
        MatchError::IllegalAction { side, name: name.to_string(), round, source }
    })
}

fn strategy_error(side: Side, name: &str, phase: Phase, source: anyhow::Error) -> MatchError {
    MatchError::Strategy { side, name: name.to_string(), phase, source }
}

/// Run a complete match and return the round-by-round report
pub fn run_match(
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    config: MatchConfig,
) -> Result<MatchReport, MatchError> {
    let mut game = IteratedMatch::new(a, b, config);
    game.run()?;
    Ok(game.report())
}

/// Recompute every round from two bid histories with the payoff rule
///
/// Histories of different length are cut to the shorter one.
pub fn replay_rounds(history_a: &[Bid], history_b: &[Bid]) -> Vec<RoundRecord> {
    let mut total_a = 0u64;
    let mut total_b = 0u64;
    history_a
        .iter()
        .zip(history_b)
        .enumerate()
        .map(|(i, (&bid_a, &bid_b))| {
            let (payoff_a, payoff_b) = payoff(bid_a, bid_b);
            total_a += payoff_a as u64;
            total_b += payoff_b as u64;
            RoundRecord {
                round: i as u32 + 1,
                bid_a,
                bid_b,
                payoff_a,
                payoff_b,
                cumulative_a: total_a,
                cumulative_b: total_b,
            }
        })
        .collect()
}
