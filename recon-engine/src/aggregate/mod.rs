//! Daily aggregation over external records
//!
//! Pure summation: empty input yields all zeros, nothing here can fail.

pub mod credit;
pub mod supplier;
pub mod transactions;

// Re-exports
pub use credit::{CreditBreakdown, aggregate_credit};
pub use supplier::{SupplierBreakdown, aggregate_supplier};
pub use transactions::{MethodTally, SalesBreakdown, aggregate_sales};
