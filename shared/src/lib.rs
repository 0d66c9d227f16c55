//! Shared types for the back-office reconciliation workspace
//!
//! Common types used across crates: data models, the error taxonomy,
//! and small utility functions.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{EngineError, EngineResult};
pub use serde::{Deserialize, Serialize};
