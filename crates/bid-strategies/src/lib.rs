//! Bid Strategies
//!
//! Example participants for the bid engine. Each one owns its state and,
//! where it needs randomness, a seeded [`BidRng`] that is rewound on
//! `initialize`, so matches between these strategies are reproducible.

mod basic;
mod kind;
mod random;
mod scripted;
mod switcher;

pub use basic::{FixedBid, RandomBid, Undercut};
pub use kind::{KindError, StrategyKind};
pub use random::BidRng;
pub use scripted::Scripted;
pub use switcher::{LowBidSwitcher, Mode};
