//! Data models
//!
//! Shared between the engine and its presentation callers.
//! All monetary fields are `f64` at rest; arithmetic happens in the engine's
//! decimal pipeline. All instants are Unix millis (`i64`).

pub mod credit;
pub mod day_operation;
pub mod operator;
pub mod reconciliation;
pub mod supplier;
pub mod transaction;

// Re-exports
pub use credit::*;
pub use day_operation::*;
pub use operator::*;
pub use reconciliation::*;
pub use supplier::*;
pub use transaction::*;
