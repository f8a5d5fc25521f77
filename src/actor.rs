//! Actor abstraction
//!
//! Anything evaluated against gates implements [`Actor`]: a stable
//! identifier plus a bag of named properties. Plain strings act as bare
//! identifiers with no properties, so callers without a user model can
//! still target individual ids.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Capability contract for gate evaluation subjects.
///
/// The identifier feeds actor-set membership and percentage bucketing;
/// the property map feeds group predicates and expression rules.
pub trait Actor: Send + Sync {
    /// Stable, opaque identifier for this actor
    fn flag_id(&self) -> String;

    /// Named properties describing this actor
    fn properties(&self) -> HashMap<String, Value> {
        HashMap::new()
    }

    /// Look up a single property by name
    fn property(&self, name: &str) -> Option<Value> {
        self.properties().remove(name)
    }
}

impl Actor for &str {
    fn flag_id(&self) -> String {
        (*self).to_string()
    }
}

impl Actor for String {
    fn flag_id(&self) -> String {
        self.clone()
    }
}

/// A plain actor: an identifier and a property map.
///
/// # Examples
///
/// ```
/// use togglegate::SimpleActor;
///
/// let actor = SimpleActor::new("User;1")
///     .with_property("plan", "basic")
///     .with_property("age", 21);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleActor {
    id: String,
    properties: HashMap<String, Value>,
}

impl SimpleActor {
    /// Create an actor with the given identifier and no properties
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: HashMap::new(),
        }
    }

    /// Create an actor with the given identifier and property map
    pub fn with_properties(id: impl Into<String>, properties: HashMap<String, Value>) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }

    /// Add a single property
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// The actor's identifier
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Actor for SimpleActor {
    fn flag_id(&self) -> String {
        self.id.clone()
    }

    fn properties(&self) -> HashMap<String, Value> {
        self.properties.clone()
    }
}
