//! Per-method sales totals for a trading date

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{PaymentMethod, Transaction};

use crate::money::{to_decimal, to_f64};

/// Sum and count for one payment method
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodTally {
    pub amount: f64,
    pub count: u32,
}

/// A date's sales split by payment method
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesBreakdown {
    pub cash: MethodTally,
    pub card: MethodTally,
    pub credit: MethodTally,
    pub split: MethodTally,
    pub total_amount: f64,
    pub total_count: u32,
}

impl SalesBreakdown {
    /// Mean transaction value; zero when no transactions were recorded.
    pub fn average_transaction_value(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        to_f64(to_decimal(self.total_amount) / Decimal::from(self.total_count))
    }
}

/// Sum a date's transactions by payment method.
pub fn aggregate_sales(transactions: &[Transaction]) -> SalesBreakdown {
    let mut sums = [Decimal::ZERO; 4];
    let mut counts = [0u32; 4];

    for tx in transactions {
        let slot = match tx.payment_method {
            PaymentMethod::Cash => 0,
            PaymentMethod::Card => 1,
            PaymentMethod::Credit => 2,
            PaymentMethod::Split => 3,
        };
        sums[slot] += to_decimal(tx.total);
        counts[slot] += 1;
    }

    let total: Decimal = sums.iter().copied().sum();
    let tally = |slot: usize| MethodTally {
        amount: to_f64(sums[slot]),
        count: counts[slot],
    };

    SalesBreakdown {
        cash: tally(0),
        card: tally(1),
        credit: tally(2),
        split: tally(3),
        total_amount: to_f64(total),
        total_count: counts.iter().sum(),
    }
}
