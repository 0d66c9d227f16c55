//! Credit-ledger payment/refund split for a trading date
//!
//! The ledger source returns unfiltered movements; the date window is
//! applied here. Refunds are pooled regardless of which method paid them
//! out; they all reduce what the day should account for.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{CreditTransaction, CreditTransactionType, SettlementMethod};

use crate::money::{to_decimal, to_f64};

/// A date's credit-account movements split by direction and method
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditBreakdown {
    pub cash_payments: f64,
    pub card_payments: f64,
    /// All refunds given, any settlement method
    pub refunds: f64,
    /// cash_payments + card_payments
    pub total: f64,
}

/// Sum credit movements inside the `[start, end)` millis window.
pub fn aggregate_credit(transactions: &[CreditTransaction], window: (i64, i64)) -> CreditBreakdown {
    let (start, end) = window;
    let mut cash = Decimal::ZERO;
    let mut card = Decimal::ZERO;
    let mut refunds = Decimal::ZERO;

    for tx in transactions {
        if tx.timestamp < start || tx.timestamp >= end {
            continue;
        }
        match tx.r#type {
            CreditTransactionType::Payment => match tx.payment_method {
                SettlementMethod::Cash => cash += to_decimal(tx.amount),
                SettlementMethod::Card => card += to_decimal(tx.amount),
            },
            CreditTransactionType::Refund => refunds += to_decimal(tx.amount),
        }
    }

    CreditBreakdown {
        cash_payments: to_f64(cash),
        card_payments: to_f64(card),
        refunds: to_f64(refunds),
        total: to_f64(cash + card),
    }
}
