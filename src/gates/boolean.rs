//! Boolean gate: unconditional on/off.
//!
//! When open, the feature is enabled for every actor and for no-actor
//! calls, overriding every other gate.

use crate::error::FlagResult;
use crate::gates::GateKind;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanGate {
    enabled: bool,
}

impl BooleanGate {
    pub const KIND: GateKind = GateKind::Boolean;

    pub(crate) fn from_raw(raw: Option<&Value>) -> FlagResult<Self> {
        let enabled = match raw {
            None => false,
            Some(value) => serde_json::from_value(value.clone())?,
        };
        Ok(Self { enabled })
    }

    pub(crate) fn to_raw(&self) -> Value {
        Value::Bool(self.enabled)
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Whether the gate unconditionally enables the feature
    pub fn is_open(&self) -> bool {
        self.enabled
    }
}
