//! # Togglegate
//!
//! Feature gating engine: decide whether a named feature is enabled for an
//! arbitrary set of candidate actors by consulting an ordered collection of
//! independent gates.
//!
//! ## Features
//!
//! - **Boolean gate** - Flip a feature on for everyone, overriding all else
//! - **Actor gate** - Enable explicit actor identifiers
//! - **Group gate** - Enable named, reusable predicates over actors
//! - **Percentage of actors** - Deterministic hash-based gradual rollout
//! - **Percentage of time** - Probabilistic rollout, actor-independent
//! - **Expression gate** - `All`/`Any`/comparison trees over actor properties
//! - **Pluggable storage** - Async adapter contract with an in-memory backend
//!
//! ## Quick Start
//!
//! ```
//! use togglegate::{FeatureFlags, SimpleActor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let flags = FeatureFlags::default();
//!
//! let pitt = SimpleActor::new("User;1");
//! flags.feature("search").enable_actor(&pitt).await?;
//!
//! assert!(flags.is_enabled("search", &[&pitt]).await?);
//! assert!(!flags.is_enabled("search", &[&"User;10"]).await?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Groups
//!
//! ```
//! use togglegate::{FeatureFlags, SimpleActor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let flags = FeatureFlags::default();
//! flags.groups().register("admins", |actor| {
//!     actor.property("admin").and_then(|v| v.as_bool()).unwrap_or(false)
//! });
//!
//! flags.feature("beta-ui").enable_group("admins").await?;
//!
//! let admin = SimpleActor::new("User;1").with_property("admin", true);
//! assert!(flags.is_enabled("beta-ui", &[&admin]).await?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Gradual Rollout
//!
//! ```
//! use togglegate::FeatureFlags;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let flags = FeatureFlags::default();
//!
//! // Roll out to 25% of actors, deterministically by identifier
//! flags.feature("new-algorithm").enable_percentage_of_actors(25).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Expression Rules
//!
//! ```
//! use togglegate::{Expression, FeatureFlags, SimpleActor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let flags = FeatureFlags::default();
//!
//! let rule = Expression::any([
//!     Expression::property("admin").eq(true),
//!     Expression::all([
//!         Expression::property("plan").eq("basic"),
//!         Expression::property("age").eq(21),
//!     ]),
//! ]);
//! flags.feature("search").enable_expression(rule).await?;
//!
//! let actor = SimpleActor::new("User;1")
//!     .with_property("plan", "basic")
//!     .with_property("age", 21);
//! assert!(flags.is_enabled("search", &[&actor]).await?);
//! # Ok(())
//! # }
//! ```

pub mod actor;
pub mod adapters;
pub mod builder;
pub mod error;
pub mod expression;
pub mod feature;
pub mod gates;
pub mod groups;
pub mod hashing;
pub mod random;
pub mod target;

pub use actor::{Actor, SimpleActor};
pub use adapters::{GateAdapter, MemoryAdapter};
pub use builder::FeatureFlagsBuilder;
pub use error::{FlagError, FlagResult};
pub use expression::{CompareOp, Expression, PropertyRef};
pub use feature::Feature;
pub use gates::{GateKind, GateState, GateValues, Percentage};
pub use groups::{GroupPredicate, GroupRegistry};
pub use random::{FixedSource, RandomSource, ThreadRngSource};
pub use target::Target;

use std::sync::Arc;
use tracing::debug;

/// The top-level feature gating client.
///
/// Owns the storage adapter, the group registry, and the randomness
/// source, and hands out [`Feature`] handles. Features are created
/// implicitly on first reference.
#[derive(Clone)]
pub struct FeatureFlags {
    adapter: Arc<dyn GateAdapter>,
    groups: GroupRegistry,
    random: Arc<dyn RandomSource>,
}

impl FeatureFlags {
    /// Create a builder for a customized client
    pub fn builder() -> FeatureFlagsBuilder {
        FeatureFlagsBuilder::new()
    }

    /// Create a client over an adapter with default groups and randomness
    pub fn new<A: GateAdapter + 'static>(adapter: A) -> Self {
        Self::from_parts(
            Arc::new(adapter),
            GroupRegistry::new(),
            Arc::new(ThreadRngSource),
        )
    }

    pub(crate) fn from_parts(
        adapter: Arc<dyn GateAdapter>,
        groups: GroupRegistry,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        debug!(adapter = adapter.adapter_type(), "Creating feature flags client");
        Self {
            adapter,
            groups,
            random,
        }
    }

    /// The group registry shared by every feature
    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    /// A handle for the named feature, created implicitly
    pub fn feature(&self, name: impl Into<String>) -> Feature {
        Feature::new(
            name.into(),
            self.adapter.clone(),
            self.groups.clone(),
            self.random.clone(),
        )
    }

    /// Enable a feature for a target
    pub async fn enable(&self, feature: &str, target: Target) -> FlagResult<()> {
        self.feature(feature).enable(target).await
    }

    /// Disable a feature for a target
    pub async fn disable(&self, feature: &str, target: Target) -> FlagResult<()> {
        self.feature(feature).disable(target).await
    }

    /// Whether a feature is enabled for the supplied actors
    pub async fn is_enabled(&self, feature: &str, actors: &[&dyn Actor]) -> FlagResult<bool> {
        self.feature(feature).is_enabled(actors).await
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::new(MemoryAdapter::new())
    }
}

impl std::fmt::Debug for FeatureFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureFlags")
            .field("adapter", &self.adapter.adapter_type())
            .field("groups", &self.groups)
            .finish()
    }
}
