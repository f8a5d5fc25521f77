//! Percentage-of-actors gate: deterministic hash-based rollout.
//!
//! An actor is enabled when its bucket for this feature falls inside the
//! stored percentage of the hash space. Repeated checks of the same actor
//! always agree, and raising the percentage only ever adds actors.

use crate::actor::Actor;
use crate::error::FlagResult;
use crate::gates::{GateKind, Percentage};
use crate::hashing;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PercentageOfActorsGate {
    percentage: f64,
}

impl PercentageOfActorsGate {
    pub const KIND: GateKind = GateKind::PercentageOfActors;

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

    /// Whether any supplied actor hashes inside the rollout
    pub fn satisfied_by(&self, feature_name: &str, actors: &[&dyn Actor]) -> bool {
        if self.percentage <= 0.0 {
            return false;
        }
        actors
            .iter()
            .any(|actor| hashing::within_percentage(feature_name, &actor.flag_id(), self.percentage))
    }
}
