//! Builder for the top-level [`FeatureFlags`] client

use crate::FeatureFlags;
use crate::adapters::{GateAdapter, MemoryAdapter};
use crate::groups::GroupRegistry;
use crate::random::{RandomSource, ThreadRngSource};
use std::sync::Arc;

/// Builder for [`FeatureFlags`].
///
/// Defaults to the in-memory adapter, an empty group registry, and the
/// thread-local randomness source.
///
/// # Examples
///
/// ```
/// use togglegate::{FeatureFlags, MemoryAdapter};
///
/// let flags = FeatureFlags::builder()
///     .adapter(MemoryAdapter::new())
///     .build();
/// flags.groups().register("admins", |actor| {
///     actor.property("admin").and_then(|v| v.as_bool()).unwrap_or(false)
/// });
/// ```
#[derive(Default)]
pub struct FeatureFlagsBuilder {
    adapter: Option<Arc<dyn GateAdapter>>,
    groups: Option<GroupRegistry>,
    random: Option<Arc<dyn RandomSource>>,
}

impl FeatureFlagsBuilder {
    /// Create a builder with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gate storage adapter
    pub fn adapter<A: GateAdapter + 'static>(mut self, adapter: A) -> Self {
        self.adapter = Some(Arc::new(adapter));
        self
    }

    /// Set a shared gate storage adapter
    pub fn adapter_arc(mut self, adapter: Arc<dyn GateAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Set the group registry
    pub fn groups(mut self, groups: GroupRegistry) -> Self {
        self.groups = Some(groups);
        self
    }

    /// Set the randomness source used by percentage-of-time gates
    pub fn random_source<R: RandomSource + 'static>(mut self, random: R) -> Self {
        self.random = Some(Arc::new(random));
        self
    }

    /// Build the client
    pub fn build(self) -> FeatureFlags {
        FeatureFlags::from_parts(
            self.adapter.unwrap_or_else(|| Arc::new(MemoryAdapter::new())),
            self.groups.unwrap_or_default(),
            self.random.unwrap_or_else(|| Arc::new(ThreadRngSource)),
        )
    }
}
