//! Group set gate: names of enabled groups.
//!
//! An actor passes when the predicate registered under any enabled group
//! name matches it. A stored name with no registration surfaces
//! `GroupNotFound` instead of silently reading as "not in group".

use crate::actor::Actor;
use crate::error::FlagResult;
use crate::gates::GateKind;
use crate::groups::GroupRegistry;
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSetGate {
    groups: HashSet<String>,
}

impl GroupSetGate {
    pub const KIND: GateKind = GateKind::Groups;

    pub(crate) fn from_raw(raw: Option<&Value>) -> FlagResult<Self> {
        let groups = match raw {
            None => HashSet::new(),
            Some(value) => serde_json::from_value(value.clone())?,
        };
        Ok(Self { groups })
    }

    pub(crate) fn to_raw(&self) -> Value {
        let mut names: Vec<&str> = self.groups.iter().map(String::as_str).collect();
        names.sort_unstable();
        Value::from(names)
    }

    /// Add a group name. Returns false if it was already present.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.groups.insert(name.into())
    }

    /// Remove a single group name, leaving the rest intact
    pub fn remove(&mut self, name: &str) -> bool {
        self.groups.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether any supplied actor belongs to any enabled group
    pub fn satisfied_by(
        &self,
        actors: &[&dyn Actor],
        registry: &GroupRegistry,
    ) -> FlagResult<bool> {
        for name in &self.groups {
            let predicate = registry.lookup(name)?;
            if actors.iter().any(|actor| predicate(*actor)) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
