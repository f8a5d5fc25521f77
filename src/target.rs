//! Enable/disable targets
//!
//! A [`Target`] is the closed set of things a gate can be toggled with:
//! everyone, a single actor, a group, a percentage of either kind, or an
//! expression tree. Typed constructors cover normal use;
//! [`Target::from_value`] adapts loose JSON values at the API boundary and
//! rejects anything no gate claims with `GateNotFound`.

use crate::actor::Actor;
use crate::error::{FlagError, FlagResult};
use crate::expression::Expression;
use crate::gates::{GateKind, Percentage};
use crate::groups::GroupRegistry;
use serde_json::Value;

/// An argument that selects and parameterizes one gate
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// The boolean gate: everyone, unconditionally
    All,
    /// A single actor identifier
    Actor(String),
    /// A registered group name
    Group(String),
    /// Deterministic rollout percentage
    PercentageOfActors(Percentage),
    /// Probabilistic rollout percentage
    PercentageOfTime(Percentage),
    /// A boolean expression over actor properties
    Expression(Expression),
}

impl Target {
    /// Target a single actor
    pub fn actor(actor: &dyn Actor) -> Self {
        Self::Actor(actor.flag_id())
    }

    /// Target an actor by bare identifier
    pub fn actor_id(id: impl Into<String>) -> Self {
        Self::Actor(id.into())
    }

    /// Target a named group
    pub fn group(name: impl Into<String>) -> Self {
        Self::Group(name.into())
    }

    /// Target a validated percentage of actors
    pub fn percentage_of_actors(percentage: impl Into<f64>) -> FlagResult<Self> {
        Ok(Self::PercentageOfActors(Percentage::new(percentage)?))
    }

    /// Target a validated percentage of time
    pub fn percentage_of_time(percentage: impl Into<f64>) -> FlagResult<Self> {
        Ok(Self::PercentageOfTime(Percentage::new(percentage)?))
    }

    /// Target an expression tree
    pub fn expression(expression: Expression) -> Self {
        Self::Expression(expression)
    }

    /// Classify a loose JSON value into a target.
    ///
    /// - `null` and booleans select the boolean gate
    /// - strings select a registered group by name, otherwise an actor id
    /// - objects must decode as an expression tree
    /// - bare numbers are rejected: a number alone cannot choose between
    ///   the two percentage gates, so percentages go through the typed
    ///   constructors instead
    ///
    /// Anything else fails with `GateNotFound` naming the value.
    pub fn from_value(value: &Value, groups: &GroupRegistry) -> FlagResult<Self> {
        match value {
            Value::Null | Value::Bool(_) => Ok(Self::All),
            Value::String(s) => {
                if groups.contains(s) {
                    Ok(Self::Group(s.clone()))
                } else {
                    Ok(Self::Actor(s.clone()))
                }
            }
            Value::Object(_) => serde_json::from_value::<Expression>(value.clone())
                .map(Self::Expression)
                .map_err(|_| FlagError::gate_not_found(value)),
            Value::Number(_) | Value::Array(_) => Err(FlagError::gate_not_found(value)),
        }
    }

    /// The gate kind this target routes to
    pub fn kind(&self) -> GateKind {
        match self {
            Self::All => GateKind::Boolean,
            Self::Actor(_) => GateKind::Actors,
            Self::Group(_) => GateKind::Groups,
            Self::PercentageOfActors(_) => GateKind::PercentageOfActors,
            Self::PercentageOfTime(_) => GateKind::PercentageOfTime,
            Self::Expression(_) => GateKind::Expression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::SimpleActor;
    use serde_json::json;

    #[test]
    fn test_actor_target_uses_identifier() {
        let actor = SimpleActor::new("User;1").with_property("admin", true);
        assert_eq!(Target::actor(&actor), Target::Actor("User;1".to_string()));
    }

    #[test]
    fn test_percentage_targets_validate() {
        assert!(Target::percentage_of_actors(5.1).is_ok());
        assert!(
            Target::percentage_of_actors(101)
                .unwrap_err()
                .is_invalid_percentage()
        );
        assert!(
            Target::percentage_of_time(-0.5)
                .unwrap_err()
                .is_invalid_percentage()
        );
    }

    #[test]
    fn test_from_value_null_and_bool_are_all() {
        let groups = GroupRegistry::new();
        assert_eq!(Target::from_value(&json!(null), &groups).unwrap(), Target::All);
        assert_eq!(Target::from_value(&json!(true), &groups).unwrap(), Target::All);
    }

    #[test]
    fn test_from_value_string_prefers_registered_group() {
        let groups = GroupRegistry::new();
        groups.register("admins", |_| true);

        assert_eq!(
            Target::from_value(&json!("admins"), &groups).unwrap(),
            Target::Group("admins".to_string())
        );
        assert_eq!(
            Target::from_value(&json!("User;1"), &groups).unwrap(),
            Target::Actor("User;1".to_string())
        );
    }

    #[test]
    fn test_from_value_expression_object() {
        let groups = GroupRegistry::new();
        let value = serde_json::to_value(Expression::property("plan").eq("basic")).unwrap();

        let target = Target::from_value(&value, &groups).unwrap();
        assert_eq!(target.kind(), GateKind::Expression);
    }

    #[test]
    fn test_from_value_rejects_unclaimed_values() {
        let groups = GroupRegistry::new();

        let number = Target::from_value(&json!(42), &groups).unwrap_err();
        assert!(number.is_gate_not_found());
        assert!(number.to_string().contains("42"));

        let object = Target::from_value(&json!({"foo": "bar"}), &groups).unwrap_err();
        assert!(object.is_gate_not_found());

        let array = Target::from_value(&json!([1, 2]), &groups).unwrap_err();
        assert!(array.is_gate_not_found());
    }

    #[test]
    fn test_kind_routing() {
        assert_eq!(Target::All.kind(), GateKind::Boolean);
        assert_eq!(Target::actor_id("User;1").kind(), GateKind::Actors);
        assert_eq!(Target::group("admins").kind(), GateKind::Groups);
        assert_eq!(
            Target::percentage_of_actors(5).unwrap().kind(),
            GateKind::PercentageOfActors
        );
        assert_eq!(
            Target::percentage_of_time(5).unwrap().kind(),
            GateKind::PercentageOfTime
        );
    }
}
