//! In-memory gate adapter
//!
//! Uses DashMap for thread-safe concurrent access. Suitable for
//! single-process deployments and testing; durable backends implement the
//! same contract.

use crate::adapters::GateAdapter;
use crate::error::FlagResult;
use crate::gates::{GateKind, GateState};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, trace};

/// In-memory gate adapter
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    features: DashMap<String, GateState>,
}

impl MemoryAdapter {
    /// Create a new in-memory adapter
    pub fn new() -> Self {
        debug!("Creating new in-memory gate adapter");
        Self {
            features: DashMap::new(),
        }
    }

    /// Names of every feature that has been referenced, sorted
    pub fn features(&self) -> Vec<String> {
        let mut names: Vec<String> = self.features.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of tracked features (for monitoring)
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

#[async_trait]
impl GateAdapter for MemoryAdapter {
    async fn read(&self, feature: &str) -> FlagResult<GateState> {
        trace!(feature = %feature, "Reading gate state");
        Ok(self
            .features
            .get(feature)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn write(&self, feature: &str, kind: GateKind, value: Value) -> FlagResult<()> {
        trace!(feature = %feature, gate = %kind, "Writing gate value");
        self.features
            .entry(feature.to_string())
            .or_default()
            .insert(kind, value);
        Ok(())
    }

    async fn clear(&self, feature: &str, kind: GateKind) -> FlagResult<()> {
        trace!(feature = %feature, gate = %kind, "Clearing gate value");
        if let Some(mut entry) = self.features.get_mut(feature) {
            entry.remove(&kind);
        }
        Ok(())
    }

    async fn clear_all(&self, feature: &str) -> FlagResult<()> {
        debug!(feature = %feature, "Clearing all gate values");
        // The feature stays listed; only its gate values reset.
        self.features.insert(feature.to_string(), GateState::new());
        Ok(())
    }

    fn adapter_type(&self) -> &'static str {
        "memory"
    }
}
