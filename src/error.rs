//! Error types for feature gating

use thiserror::Error;

/// Result type for feature gating operations
pub type FlagResult<T> = Result<T, FlagError>;

/// Feature gating errors
#[derive(Debug, Error)]
pub enum FlagError {
    /// No gate claims the value passed to enable/disable
    #[error("could not find a gate for {0}")]
    GateNotFound(String),

    /// A group name was referenced but never registered
    #[error("group '{0}' has not been registered")]
    GroupNotFound(String),

    /// Percentage outside `[0, 100]` or not a finite number
    #[error("percentage must be a number between 0 and 100, got {0}")]
    InvalidPercentage(String),

    /// Adapter failure (storage backend, serialization transport, etc.)
    #[error("storage error: {0}")]
    Storage(String),

    /// A stored gate value could not be decoded
    #[error("corrupt gate value: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FlagError {
    /// Create a gate-not-found error from any displayable value
    pub fn gate_not_found(value: impl std::fmt::Display) -> Self {
        Self::GateNotFound(value.to_string())
    }

    /// Create a group-not-found error
    pub fn group_not_found(name: impl Into<String>) -> Self {
        Self::GroupNotFound(name.into())
    }

    /// Create a storage error
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }

    /// Check if this error is a gate-not-found error
    pub fn is_gate_not_found(&self) -> bool {
        matches!(self, Self::GateNotFound(_))
    }

    /// Check if this error is a group-not-found error
    pub fn is_group_not_found(&self) -> bool {
        matches!(self, Self::GroupNotFound(_))
    }

    /// Check if this error is an invalid-percentage error
    pub fn is_invalid_percentage(&self) -> bool {
        matches!(self, Self::InvalidPercentage(_))
    }
}
