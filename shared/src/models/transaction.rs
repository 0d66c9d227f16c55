//! Store Transaction Model (external, immutable)

use serde::{Deserialize, Serialize};

/// Payment method of a store transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "CASH")]
    Cash,
    #[serde(rename = "CARD")]
    Card,
    #[serde(rename = "CREDIT")]
    Credit,
    #[serde(rename = "SPLIT")]
    Split,
}

/// A completed store transaction, as reported by the POS
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub store_id: String,
    /// Completion time (Unix millis)
    pub timestamp: i64,
    pub payment_method: PaymentMethod,
    /// Final amount charged
    pub total: f64,
}
