//! Percentage-of-time gate: stateless probabilistic rollout.
//!
//! Each check draws once from the randomness source and ignores actors
//! entirely. The resolver draws at most once per enablement question so
//! the probability does not compound with the actor count.

use crate::error::FlagResult;
use crate::gates::{GateKind, Percentage};
use crate::random::RandomSource;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PercentageOfTimeGate {
    percentage: f64,
}

impl PercentageOfTimeGate {
    pub const KIND: GateKind = GateKind::PercentageOfTime;

    pub(crate) fn from_raw(raw: Option<&Value>) -> FlagResult<Self> {
        let percentage = match raw {
            None => 0.0,
            Some(value) => serde_json::from_value(value.clone())?,
        };
        Ok(Self { percentage })
    }

    pub(crate) fn to_raw(&self) -> Value {
        Value::from(self.percentage)
    }

    /// Store a new percentage, replacing the previous value
    pub fn set(&mut self, percentage: Percentage) {
        self.percentage = percentage.value();
    }

    /// Reset to the disabled baseline of zero
    pub fn clear(&mut self) {
        self.percentage = 0.0;
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Draw once and decide. A zero percentage never draws.
    pub fn satisfied_by(&self, random: &dyn RandomSource) -> bool {
        if self.percentage <= 0.0 {
            return false;
        }
        random.sample() * 100.0 < self.percentage
    }
}
