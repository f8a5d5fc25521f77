//! Group registry
//!
//! Groups bind a name to a reusable predicate over actors. Registration is
//! expected during application startup; evaluation only ever looks names
//! up. The registry is safe for concurrent registration and lookup.
//!
//! Re-registering a name overwrites the previous predicate. Last writer
//! wins; this is intentional so setup code can be re-run.

use crate::actor::Actor;
use crate::error::{FlagError, FlagResult};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Predicate deciding whether an actor belongs to a group
pub type GroupPredicate = Arc<dyn Fn(&dyn Actor) -> bool + Send + Sync>;

/// Process-wide mapping from group name to membership predicate.
///
/// Cloning is cheap and shares the underlying map.
///
/// # Examples
///
/// ```
/// use togglegate::{GroupRegistry, SimpleActor};
///
/// let groups = GroupRegistry::new();
/// groups.register("admins", |actor| {
///     actor.property("admin").and_then(|v| v.as_bool()).unwrap_or(false)
/// });
///
/// let admin = SimpleActor::new("User;1").with_property("admin", true);
/// let predicate = groups.lookup("admins").unwrap();
/// assert!(predicate(&admin));
/// ```
#[derive(Clone, Default)]
pub struct GroupRegistry {
    groups: Arc<DashMap<String, GroupPredicate>>,
}

impl GroupRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate under a name, replacing any previous one
    pub fn register<F>(&self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&dyn Actor) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(group = %name, "Registering group");
        self.groups.insert(name, Arc::new(predicate));
    }

    /// Look up a group's predicate by name
    pub fn lookup(&self, name: &str) -> FlagResult<GroupPredicate> {
        self.groups
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| FlagError::group_not_found(name))
    }

    /// Whether a group with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Names of all registered groups
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of registered groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no groups are registered
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl std::fmt::Debug for GroupRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupRegistry")
            .field("groups", &self.names())
            .finish()
    }
}
