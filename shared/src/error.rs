//! Engine error taxonomy
//!
//! Only the lifecycle transitions (open/close/reopen) can fail; calculation
//! functions degrade to zero instead of erroring. Messaging is left to the
//! caller; the engine never retries.

/// Engine error enum
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Input rejected before any state was touched (400-class)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Another day operation holds the store's single open slot (409-class)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The freshly re-read day status contradicts the transition precondition
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Unknown day operation id
    #[error("Not found: {0}")]
    NotFound(String),

    /// An external data source failed to answer
    #[error("Data source error: {0}")]
    Source(String),
}

/// Engine-level Result type
pub type EngineResult<T> = Result<T, EngineError>;

// ========== Helper Constructors ==========

impl EngineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}
