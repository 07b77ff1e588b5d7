//! Bid Engine
//!
//! Core rules and match loop for a repeated two-player bidding game.
//! Each round both players pick a bid in `[1, N]` at the same time; the
//! strictly lower bid wins its own value, ties pay nothing.
//!
//! Strategies plug in through the [`Strategy`] trait. Tournament runners,
//! strategy libraries and presentation live outside this crate.

mod action;
mod config;
mod error;
mod game;
mod record;
mod report;
mod strategy;

pub use action::{validate_action, ActionError, Bid, Decision};
pub use config::{ConfigError, MatchConfig};
pub use error::{MatchError, Phase};
pub use game::{replay_rounds, run_match, IteratedMatch, MatchReport, RoundRecord};
pub use record::{Observation, RoundResult};
pub use report::{LineBuffer, LogReporter, RoundReport, RoundReporter};
pub use strategy::{Side, Strategy};

/// Payoff rule for one round
/// Returns (payoff_self, payoff_opponent)
///
/// Inputs must already be validated; no bounds are checked here.
pub fn payoff(i: Bid, j: Bid) -> (u32, u32) {
    use std::cmp::Ordering;

    match i.cmp(&j) {
        Ordering::Less => (i, 0),
        Ordering::Equal => (0, 0),
        Ordering::Greater => (0, j),
    }
}
