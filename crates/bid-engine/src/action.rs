//! Bids and the legality check applied to every decision

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A validated bid in `[1, N]`
pub type Bid = u32;

/// What a strategy hands back from `decide`, before the engine validates it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// A typed integer bid. May still be out of range.
    Bid(i64),
    /// An untyped value from an adapter (human entry, external process).
    Raw(Value),
}

impl From<i64> for Decision {
    fn from(bid: i64) -> Self {
        Decision::Bid(bid)
    }
}

impl From<Bid> for Decision {
    fn from(bid: Bid) -> Self {
        Decision::Bid(bid as i64)
    }
}

impl From<Value> for Decision {
    fn from(value: Value) -> Self {
        Decision::Raw(value)
    }
}

/// Why a decision is not a legal bid
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("action must be an integer, got {found}")]
    IllegalType { found: String },

    #[error("action {action} out of bounds (1..{n})")]
    IllegalRange { action: i64, n: u32 },
}

/// Check a decision against the legal range `[1, n]`
///
/// Non-integer values fail with [`ActionError::IllegalType`] before the
/// range is looked at. The payoff rule relies on this having run first.
pub fn validate_action(decision: &Decision, n: u32) -> Result<Bid, ActionError> {
    let action = match decision {
        Decision::Bid(action) => *action,
        Decision::Raw(value) => as_integer(value)?,
    };

    if action < 1 || action > n as i64 {
        return Err(ActionError::IllegalRange { action, n });
    }

    Ok(action as Bid)
}

fn as_integer(value: &Value) -> Result<i64, ActionError> {
    if let Some(i) = value.as_i64() {
        return Ok(i);
    }
    // u64 beyond i64::MAX is an integer, just hopelessly out of range
    if value.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    Err(ActionError::IllegalType { found: type_name(value).to_string() })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
