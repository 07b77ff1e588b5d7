//! Replays a fixed list of decisions

use anyhow::bail;
use bid_engine::{Decision, Observation, RoundResult, Strategy};

/// Plays back pre-recorded decisions in order, cycling when it runs out
///
/// Decisions are passed through untouched, so a script can carry raw
/// values from an outside source (a person typing bids, another process)
/// and let the engine judge them.
#[derive(Clone, Debug)]
pub struct Scripted {
    name: String,
    script: Vec<Decision>,
    cursor: usize,
}

impl Scripted {
    pub fn new(name: impl Into<String>, script: Vec<Decision>) -> Self {
        Self { name: name.into(), script, cursor: 0 }
    }

    /// Script of plain integer bids
    pub fn bids(name: impl Into<String>, bids: &[i64]) -> Self {
        Self::new(name, bids.iter().map(|&b| Decision::Bid(b)).collect())
    }
}

impl Strategy for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, _n: u32) -> anyhow::Result<()> {
        self.cursor = 0;
        Ok(())
    }

    fn decide(&mut self, _obs: &Observation<'_>) -> anyhow::Result<Decision> {
        if self.script.is_empty() {
            bail!("script for {} is empty", self.name);
        }
        let decision = self.script[self.cursor % self.script.len()].clone();
        self.cursor += 1;
        Ok(decision)
    }

    fn observe(&mut self, _result: &RoundResult<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obs() -> Observation<'static> {
        Observation {
            n: 5,
            round: 1,
            own_name: "s",
            opponent_name: "o",
            own_history: &[],
            opponent_history: &[],
        }
    }

    #[test]
    fn test_cycles_through_script() {
        let mut s = Scripted::bids("s", &[3, 1]);
        s.initialize(5).unwrap();

        let played: Vec<_> = (0..5).map(|_| s.decide(&obs()).unwrap()).collect();
        assert_eq!(
            played,
            vec![Decision::Bid(3), Decision::Bid(1), Decision::Bid(3), Decision::Bid(1), Decision::Bid(3)]
        );
    }

    #[test]
    fn test_initialize_rewinds() {
        let mut s = Scripted::bids("s", &[4, 2]);
        s.initialize(5).unwrap();
        s.decide(&obs()).unwrap();

        s.initialize(5).unwrap();
        assert_eq!(s.decide(&obs()).unwrap(), Decision::Bid(4));
    }

    #[test]
    fn test_raw_values_pass_through() {
        let mut s = Scripted::new("typed", vec![json!("three").into()]);
        s.initialize(5).unwrap();
        assert_eq!(s.decide(&obs()).unwrap(), Decision::Raw(json!("three")));
    }

    #[test]
    fn test_empty_script_errors() {
        let mut s = Scripted::new("blank", vec![]);
        s.initialize(5).unwrap();
        let err = s.decide(&obs()).unwrap_err();
        assert_eq!(err.to_string(), "script for blank is empty");
    }
}
