//! Gate variants
//!
//! A feature owns one gate of each kind. Each gate module carries the
//! parsed value for its kind, the raw-value codec used with the adapter,
//! the mutation entry points, and the satisfaction check.

mod actor_set;
mod boolean;
mod expression;
mod group_set;
mod percentage_of_actors;
mod percentage_of_time;

pub use actor_set::ActorSetGate;
pub use boolean::BooleanGate;
pub use expression::ExpressionGate;
pub use group_set::GroupSetGate;
pub use percentage_of_actors::PercentageOfActorsGate;
pub use percentage_of_time::PercentageOfTimeGate;

use crate::error::{FlagError, FlagResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// The closed set of gate kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    Boolean,
    Actors,
    Groups,
    PercentageOfActors,
    PercentageOfTime,
    Expression,
}

impl GateKind {
    /// Every gate kind, in resolution order
    pub const ALL: [GateKind; 6] = [
        GateKind::Boolean,
        GateKind::Actors,
        GateKind::Groups,
        GateKind::PercentageOfActors,
        GateKind::PercentageOfTime,
        GateKind::Expression,
    ];

    /// Stable string form, usable as an adapter storage key
    pub fn as_str(&self) -> &'static str {
        match self {
            GateKind::Boolean => "boolean",
            GateKind::Actors => "actors",
            GateKind::Groups => "groups",
            GateKind::PercentageOfActors => "percentage_of_actors",
            GateKind::PercentageOfTime => "percentage_of_time",
            GateKind::Expression => "expression",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rollout percentage, validated into `[0, 100]`.
///
/// Construction rejects out-of-range and non-finite values instead of
/// clamping them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent, the disabled baseline for percentage gates
    pub const ZERO: Percentage = Percentage(0.0);

    /// Validate a number into a percentage
    pub fn new(value: impl Into<f64>) -> FlagResult<Self> {
        let value = value.into();
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(FlagError::InvalidPercentage(value.to_string()));
        }
        Ok(Self(value))
    }

    /// The numeric value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw per-feature gate state exchanged with an adapter
pub type GateState = HashMap<GateKind, Value>;

/// Parsed snapshot of every gate for one feature.
///
/// Built from one adapter read; evaluation never goes back to storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GateValues {
    pub boolean: BooleanGate,
    pub actors: ActorSetGate,
    pub groups: GroupSetGate,
    pub percentage_of_actors: PercentageOfActorsGate,
    pub percentage_of_time: PercentageOfTimeGate,
    pub expression: ExpressionGate,
}

impl GateValues {
    /// Decode a raw adapter mapping. Absent kinds decode to their
    /// disabled baseline.
    pub fn from_raw(raw: &GateState) -> FlagResult<Self> {
        Ok(Self {
            boolean: BooleanGate::from_raw(raw.get(&GateKind::Boolean))?,
            actors: ActorSetGate::from_raw(raw.get(&GateKind::Actors))?,
            groups: GroupSetGate::from_raw(raw.get(&GateKind::Groups))?,
            percentage_of_actors: PercentageOfActorsGate::from_raw(
                raw.get(&GateKind::PercentageOfActors),
            )?,
            percentage_of_time: PercentageOfTimeGate::from_raw(
                raw.get(&GateKind::PercentageOfTime),
            )?,
            expression: ExpressionGate::from_raw(raw.get(&GateKind::Expression))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gate_kind_strings() {
        assert_eq!(GateKind::Boolean.as_str(), "boolean");
        assert_eq!(GateKind::PercentageOfActors.as_str(), "percentage_of_actors");
        assert_eq!(GateKind::ALL.len(), 6);
    }

    #[test]
    fn test_percentage_accepts_bounds() {
        assert_eq!(Percentage::new(0).unwrap().value(), 0.0);
        assert_eq!(Percentage::new(100).unwrap().value(), 100.0);
        assert_eq!(Percentage::new(5.1).unwrap().value(), 5.1);
    }

    #[test]
    fn test_percentage_rejects_out_of_range() {
        assert!(Percentage::new(-1).unwrap_err().is_invalid_percentage());
        assert!(Percentage::new(100.1).unwrap_err().is_invalid_percentage());
        assert!(Percentage::new(f64::NAN).unwrap_err().is_invalid_percentage());
        assert!(
            Percentage::new(f64::INFINITY)
                .unwrap_err()
                .is_invalid_percentage()
        );
    }

    #[test]
    fn test_gate_values_from_empty_raw() {
        let values = GateValues::from_raw(&GateState::new()).unwrap();
        assert_eq!(values, GateValues::default());
        assert!(!values.boolean.is_open());
        assert!(values.actors.is_empty());
    }

    #[test]
    fn test_gate_values_from_populated_raw() {
        let mut raw = GateState::new();
        raw.insert(GateKind::Boolean, json!(true));
        raw.insert(GateKind::Actors, json!(["User;1", "User;2"]));
        raw.insert(GateKind::PercentageOfActors, json!(25.0));

        let values = GateValues::from_raw(&raw).unwrap();
        assert!(values.boolean.is_open());
        assert!(values.actors.contains("User;1"));
        assert_eq!(values.percentage_of_actors.percentage(), 25.0);
    }

    #[test]
    fn test_gate_values_rejects_corrupt_raw() {
        let mut raw = GateState::new();
        raw.insert(GateKind::Boolean, json!("not-a-bool"));
        assert!(GateValues::from_raw(&raw).is_err());
    }
}
