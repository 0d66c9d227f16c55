//! Supplier payment totals for a trading date

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{SettlementMethod, SupplierPayment};

use crate::money::{to_decimal, to_f64};

/// A date's supplier payments split by method
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierBreakdown {
    pub cash: f64,
    pub card: f64,
    pub total: f64,
}

/// Sum a date's supplier payments by method. The source query is already
/// date-scoped; no filtering happens here.
pub fn aggregate_supplier(payments: &[SupplierPayment]) -> SupplierBreakdown {
    let mut cash = Decimal::ZERO;
    let mut card = Decimal::ZERO;

    for p in payments {
        match p.payment_method {
            SettlementMethod::Cash => cash += to_decimal(p.amount),
            SettlementMethod::Card => card += to_decimal(p.amount),
        }
    }

    SupplierBreakdown {
        cash: to_f64(cash),
        card: to_f64(card),
        total: to_f64(cash + card),
    }
}
