//! Actor set gate: identifiers explicitly enabled.

use crate::actor::Actor;
use crate::error::FlagResult;
use crate::gates::GateKind;
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorSetGate {
    actors: HashSet<String>,
}

impl ActorSetGate {
    pub const KIND: GateKind = GateKind::Actors;

    pub(crate) fn from_raw(raw: Option<&Value>) -> FlagResult<Self> {
        let actors = match raw {
            None => HashSet::new(),
            Some(value) => serde_json::from_value(value.clone())?,
        };
        Ok(Self { actors })
    }

    pub(crate) fn to_raw(&self) -> Value {
        let mut ids: Vec<&str> = self.actors.iter().map(String::as_str).collect();
        ids.sort_unstable();
        Value::from(ids)
    }

    /// Add an identifier. Returns false if it was already present.
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        self.actors.insert(id.into())
    }

    /// Remove a single identifier, leaving the rest of the set intact
    pub fn remove(&mut self, id: &str) -> bool {
        self.actors.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actors.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether any supplied actor is explicitly enabled
    pub fn satisfied_by(&self, actors: &[&dyn Actor]) -> bool {
        !self.actors.is_empty() && actors.iter().any(|actor| self.contains(&actor.flag_id()))
    }
}
