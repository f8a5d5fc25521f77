//! Gate storage adapters
//!
//! The engine keeps no durable state of its own; per-feature gate values
//! live behind the [`GateAdapter`] contract. The core owns serialization
//! of gate values into the raw mapping and round-trips every gate kind
//! losslessly; how the mapping is persisted is the adapter's concern.
//!
//! Adapter calls may be slow and may fail. The core propagates failures
//! unmodified and performs no retries; a failed write must leave the
//! previous gate state logically unchanged.

mod memory;

pub use memory::MemoryAdapter;

use crate::error::FlagResult;
use crate::gates::{GateKind, GateState};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for gate storage backends
#[async_trait]
pub trait GateAdapter: Send + Sync {
    /// Read every stored gate value for a feature. Features never written
    /// read as an empty mapping.
    async fn read(&self, feature: &str) -> FlagResult<GateState>;

    /// Write one gate's raw value for a feature
    async fn write(&self, feature: &str, kind: GateKind, value: Value) -> FlagResult<()>;

    /// Remove one gate's stored value for a feature
    async fn clear(&self, feature: &str, kind: GateKind) -> FlagResult<()>;

    /// Remove every stored gate value for a feature
    async fn clear_all(&self, feature: &str) -> FlagResult<()>;

    /// Get adapter type name for debugging
    fn adapter_type(&self) -> &'static str;
}
