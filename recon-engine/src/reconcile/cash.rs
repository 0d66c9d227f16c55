//! Drawer-side calculations: counted cash, expected cash, cash variance

use rust_decimal::Decimal;

use shared::models::ReconciliationRecord;

use crate::money::{to_decimal, to_f64};
use crate::record::{AggregateContext, effective_totals};

/// Counted drawer cash: Σ(face × count) over the schedule, plus misc.
/// Counts are clamped at entry; a stray negative still counts as zero.
pub fn actual_cash_count(record: &ReconciliationRecord) -> f64 {
    let mut total = Decimal::ZERO;
    for line in &record.denomination_counts {
        total += to_decimal(line.face_value) * Decimal::from(line.count.max(0));
    }
    total += to_decimal(record.cash_misc_amount);
    to_f64(total)
}

/// What the drawer should hold after the day's recorded movements.
///
/// `bank_transfers` is signed: positive cash left the drawer for the bank,
/// negative means bank money entered the drawer.
pub fn expected_cash(record: &ReconciliationRecord, ctx: &AggregateContext) -> f64 {
    let eff = effective_totals(record, ctx);

    let total = to_decimal(eff.opening_cash) + to_decimal(eff.cash_sales)
        + to_decimal(record.owner_cash_deposits)
        + to_decimal(record.credit_payments_cash)
        - to_decimal(record.owner_cash_withdrawals)
        - to_decimal(record.supplier_payments)
        - to_decimal(record.expense_payments)
        - to_decimal(record.credit_refunds_given)
        - to_decimal(record.bank_transfers);

    to_f64(total)
}

/// counted − expected, to 2 decimal places
pub fn cash_variance(record: &ReconciliationRecord, ctx: &AggregateContext) -> f64 {
    let actual = to_decimal(actual_cash_count(record));
    let expected = to_decimal(expected_cash(record, ctx));
    to_f64(actual - expected)
}
