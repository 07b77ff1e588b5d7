//! Per-round reporting for verbose matches

use std::fmt;

use crate::action::Bid;

/// One resolved round as it is shown to people
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport<'a> {
    pub round: u32,
    pub name_a: &'a str,
    pub name_b: &'a str,
    pub bid_a: Bid,
    pub bid_b: Bid,
    pub payoff_a: u32,
    pub payoff_b: u32,
    pub total_a: u64,
    pub total_b: u64,
}

impl fmt::Display for RoundReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Round {:3} | {}: bid={:2}, payoff={:2}, total={:4} || {}: bid={:2}, payoff={:2}, total={:4}",
            self.round,
            self.name_a,
            self.bid_a,
            self.payoff_a,
            self.total_a,
            self.name_b,
            self.bid_b,
            self.payoff_b,
            self.total_b,
        )
    }
}

/// Sink for round reports; only called when the match is verbose
pub trait RoundReporter {
    fn report(&mut self, round: &RoundReport<'_>);
}

/// Writes each round through the `log` facade at info level
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl RoundReporter for LogReporter {
    fn report(&mut self, round: &RoundReport<'_>) {
        log::info!("{}", round);
    }
}

/// Collects rendered lines in memory
#[derive(Clone, Debug, Default)]
pub struct LineBuffer {
    pub lines: Vec<String>,
}

impl RoundReporter for LineBuffer {
    fn report(&mut self, round: &RoundReport<'_>) {
        self.lines.push(round.to_string());
    }
}

impl<R: RoundReporter + ?Sized> RoundReporter for &mut R {
    fn report(&mut self, round: &RoundReport<'_>) {
        (**self).report(round)
    }
}
