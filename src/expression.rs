//! Boolean expression trees over actor properties
//!
//! An [`Expression`] is a closed sum type: boolean literal, property
//! comparison, or an `All`/`Any` combinator over child expressions. Trees
//! are immutable once built, serialize to a tagged JSON shape, and may nest
//! arbitrarily.
//!
//! Evaluation is per-actor-then-OR: each supplied actor is tested against
//! the whole tree on its own, and the expression holds if any single actor
//! satisfies it. `All(plan == "basic", age == 21)` therefore requires one
//! actor matching both comparisons, not two actors matching one each.
//!
//! # Examples
//!
//! ```
//! use togglegate::{Actor, Expression, SimpleActor};
//!
//! let expression = Expression::any([
//!     Expression::property("admin").eq(true),
//!     Expression::all([
//!         Expression::property("plan").eq("basic"),
//!         Expression::property("age").eq(21),
//!     ]),
//! ]);
//!
//! let admin = SimpleActor::new("User;1").with_property("admin", true);
//! assert!(expression.evaluate(&[&admin]));
//! ```

use crate::actor::Actor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison operator for property expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// A boolean expression tree evaluated against actor properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    /// Constant result, ignores actors
    Boolean { value: bool },
    /// Compare a named actor property against an operand
    Property {
        name: String,
        op: CompareOp,
        operand: Value,
    },
    /// True iff every child matches the same single actor
    All { children: Vec<Expression> },
    /// True iff at least one child matches the same single actor
    Any { children: Vec<Expression> },
}

impl Expression {
    /// Constant expression
    pub fn boolean(value: bool) -> Self {
        Self::Boolean { value }
    }

    /// Start a property comparison: `Expression::property("plan").eq("basic")`
    pub fn property(name: impl Into<String>) -> PropertyRef {
        PropertyRef { name: name.into() }
    }

    /// Conjunction over children, per actor
    pub fn all(children: impl IntoIterator<Item = Expression>) -> Self {
        Self::All {
            children: children.into_iter().collect(),
        }
    }

    /// Disjunction over children, per actor
    pub fn any(children: impl IntoIterator<Item = Expression>) -> Self {
        Self::Any {
            children: children.into_iter().collect(),
        }
    }

    /// Evaluate the tree against a set of candidate actors.
    ///
    /// With no actors, property comparisons have no subject and are false;
    /// boolean literals and combinators of literals still resolve.
    pub fn evaluate(&self, actors: &[&dyn Actor]) -> bool {
        if actors.is_empty() {
            return self.matches_none();
        }
        actors.iter().any(|actor| self.matches(*actor))
    }

    /// Whether a single actor satisfies the whole tree
    fn matches(&self, actor: &dyn Actor) -> bool {
        match self {
            Self::Boolean { value } => *value,
            Self::Property { name, op, operand } => actor
                .property(name)
                .map(|actual| compare(*op, &actual, operand))
                .unwrap_or(false),
            Self::All { children } => children.iter().all(|child| child.matches(actor)),
            Self::Any { children } => children.iter().any(|child| child.matches(actor)),
        }
    }

    /// Zero-actor evaluation: property comparisons are pinned false
    fn matches_none(&self) -> bool {
        match self {
            Self::Boolean { value } => *value,
            Self::Property { .. } => false,
            Self::All { children } => children.iter().all(Self::matches_none),
            Self::Any { children } => children.iter().any(Self::matches_none),
        }
    }
}

/// Builder handle for property comparisons
#[derive(Debug, Clone)]
pub struct PropertyRef {
    name: String,
}

impl PropertyRef {
    fn build(self, op: CompareOp, operand: impl Into<Value>) -> Expression {
        Expression::Property {
            name: self.name,
            op,
            operand: operand.into(),
        }
    }

    /// Property equals operand
    pub fn eq(self, operand: impl Into<Value>) -> Expression {
        self.build(CompareOp::Eq, operand)
    }

    /// Property differs from operand
    pub fn not_eq(self, operand: impl Into<Value>) -> Expression {
        self.build(CompareOp::NotEq, operand)
    }

    /// Property strictly greater than operand
    pub fn gt(self, operand: impl Into<Value>) -> Expression {
        self.build(CompareOp::Gt, operand)
    }

    /// Property greater than or equal to operand
    pub fn gte(self, operand: impl Into<Value>) -> Expression {
        self.build(CompareOp::Gte, operand)
    }

    /// Property strictly less than operand
    pub fn lt(self, operand: impl Into<Value>) -> Expression {
        self.build(CompareOp::Lt, operand)
    }

    /// Property less than or equal to operand
    pub fn lte(self, operand: impl Into<Value>) -> Expression {
        self.build(CompareOp::Lte, operand)
    }
}

/// Compare two JSON values under an operator.
///
/// Equality tolerates integer/float representation differences. Ordering
/// compares numbers numerically and strings lexicographically; any other
/// combination is a non-match.
fn compare(op: CompareOp, actual: &Value, operand: &Value) -> bool {
    match op {
        CompareOp::Eq => values_equal(actual, operand),
        CompareOp::NotEq => !values_equal(actual, operand),
        CompareOp::Gt | CompareOp::Gte | CompareOp::Lt | CompareOp::Lte => {
            let ordering = match (actual, operand) {
                (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b),
                    _ => None,
                },
                (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
                _ => None,
            };
            match ordering {
                Some(ordering) => match op {
                    CompareOp::Gt => ordering.is_gt(),
                    CompareOp::Gte => ordering.is_ge(),
                    CompareOp::Lt => ordering.is_lt(),
                    CompareOp::Lte => ordering.is_le(),
                    _ => unreachable!(),
                },
                None => false,
            }
        }
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    if let (Some(a), Some(b)) = (a.as_f64(), b.as_f64()) {
        return a == b;
    }
    a == b
}
