//! Expression gate: a stored boolean rule over actor properties.

use crate::actor::Actor;
use crate::error::FlagResult;
use crate::expression::Expression;
use crate::gates::GateKind;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionGate {
    expression: Option<Expression>,
}

impl ExpressionGate {
    pub const KIND: GateKind = GateKind::Expression;

    pub(crate) fn from_raw(raw: Option<&Value>) -> FlagResult<Self> {
        let expression = match raw {
            None => None,
            Some(value) => Some(serde_json::from_value(value.clone())?),
        };
        Ok(Self { expression })
    }

    pub(crate) fn to_raw(&self) -> FlagResult<Option<Value>> {
        match &self.expression {
            None => Ok(None),
            Some(expression) => Ok(Some(serde_json::to_value(expression)?)),
        }
    }

    /// Store a tree, replacing any previous one
    pub fn set(&mut self, expression: Expression) {
        self.expression = Some(expression);
    }

    /// Clear the stored tree
    pub fn clear(&mut self) {
        self.expression = None;
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    /// Evaluate the stored tree, if any, against the supplied actors
    pub fn satisfied_by(&self, actors: &[&dyn Actor]) -> bool {
        self.expression
            .as_ref()
            .map(|expression| expression.evaluate(actors))
            .unwrap_or(false)
    }
}
