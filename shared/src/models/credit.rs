//! Credit Ledger Model (external, immutable)
//!
//! Movements on customer credit accounts: payments received against an
//! account balance, and refunds given out of it.

use serde::{Deserialize, Serialize};

/// How a credit-account movement was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementMethod {
    #[serde(rename = "CASH")]
    Cash,
    #[serde(rename = "CARD")]
    Card,
}

/// Direction of a credit-account movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditTransactionType {
    #[serde(rename = "PAYMENT")]
    Payment,
    #[serde(rename = "REFUND")]
    Refund,
}

/// A movement on a customer credit account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditTransaction {
    pub id: String,
    /// Movement time (Unix millis)
    pub timestamp: i64,
    pub r#type: CreditTransactionType,
    pub payment_method: SettlementMethod,
    pub amount: f64,
}
