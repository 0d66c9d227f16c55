//! Bank-side calculations: expected balance, bank variance, card batch check
//!
//! `card_swipe_variance` checks the terminal's reported batch against
//! recorded card-paying activity. It is orthogonal to `bank_variance` and
//! must not be folded into it.

use shared::models::ReconciliationRecord;

use crate::money::{to_decimal, to_f64};
use crate::record::{AggregateContext, effective_totals};

/// What the bank account should show after the day's recorded movements.
pub fn expected_bank(record: &ReconciliationRecord, ctx: &AggregateContext) -> f64 {
    let eff = effective_totals(record, ctx);

    let total = to_decimal(eff.opening_bank_balance) + to_decimal(eff.card_sales)
        + to_decimal(record.credit_payments_card)
        + (to_decimal(record.owner_bank_deposits) - to_decimal(record.owner_bank_withdrawals))
        + to_decimal(record.bank_transfers)
        - to_decimal(record.bank_withdrawals);

    to_f64(total)
}

/// reported − expected, to 2 decimal places
pub fn bank_variance(record: &ReconciliationRecord, ctx: &AggregateContext) -> f64 {
    let actual = to_decimal(record.actual_bank_balance);
    let expected = to_decimal(expected_bank(record, ctx));
    to_f64(actual - expected)
}

/// Recorded card-paying activity: effective card sales + card credit payments.
pub fn card_reconciliation_total(record: &ReconciliationRecord, ctx: &AggregateContext) -> f64 {
    let eff = effective_totals(record, ctx);
    to_f64(to_decimal(eff.card_sales) + to_decimal(record.credit_payments_card))
}

/// Terminal batch − recorded card activity.
pub fn card_swipe_variance(record: &ReconciliationRecord, ctx: &AggregateContext) -> f64 {
    let recorded = to_decimal(card_reconciliation_total(record, ctx));
    to_f64(to_decimal(record.pos_card_swipe_amount) - recorded)
}
