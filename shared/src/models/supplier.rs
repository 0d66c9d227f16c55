//! Supplier Payment Model (external, immutable)

use serde::{Deserialize, Serialize};

use super::SettlementMethod;

/// A payment made to a supplier from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierPayment {
    pub id: String,
    /// Payment time (Unix millis)
    pub timestamp: i64,
    pub payment_method: SettlementMethod,
    pub amount: f64,
}
