//! Editing-session state and the auto/manual merge rule
//!
//! Override fields resolve against a fresh [`AggregateContext`] at
//! calculation time; a `Manual` entry survives any amount of background
//! re-aggregation. Only [`refresh`] discards manual entries.

use serde::{Deserialize, Serialize};

use shared::models::{DenominationCount, EffectiveTotals, ReconciliationRecord};

use crate::aggregate::{CreditBreakdown, SalesBreakdown, SupplierBreakdown};
use crate::money::money_eq;

/// Auto-computed aggregates an editing session resolves against
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateContext {
    pub sales: SalesBreakdown,
    pub credit: CreditBreakdown,
    pub supplier: SupplierBreakdown,
    /// Opening balances from the day operation (zero when none exists yet)
    pub opening_cash: f64,
    pub opening_bank_balance: f64,
}

/// Resolve every override field to its effective value.
pub fn effective_totals(record: &ReconciliationRecord, ctx: &AggregateContext) -> EffectiveTotals {
    EffectiveTotals {
        total_sales: record.total_sales.effective(ctx.sales.total_amount),
        cash_sales: record.cash_sales.effective(ctx.sales.cash.amount),
        card_sales: record.card_sales.effective(ctx.sales.card.amount),
        credit_sales: record.credit_sales.effective(ctx.sales.credit.amount),
        split_sales: record.split_sales.effective(ctx.sales.split.amount),
        opening_cash: record.opening_cash.effective(ctx.opening_cash),
        opening_bank_balance: record
            .opening_bank_balance
            .effective(ctx.opening_bank_balance),
    }
}

/// Session-start auto-population: fill the ledger-backed plain fields.
/// Override fields are left alone: `Auto` ones already resolve against
/// the context, and `Manual` ones must not be touched.
pub fn hydrate(record: &mut ReconciliationRecord, ctx: &AggregateContext) {
    record.credit_payments_cash = ctx.credit.cash_payments;
    record.credit_payments_card = ctx.credit.card_payments;
    record.credit_refunds_given = ctx.credit.refunds;
    record.supplier_payments = ctx.supplier.total;
}

/// Explicit refresh: the one path that discards manual overrides.
/// Re-running with unchanged upstream data yields an identical record.
pub fn refresh(record: &mut ReconciliationRecord, ctx: &AggregateContext) {
    record.total_sales.clear();
    record.cash_sales.clear();
    record.card_sales.clear();
    record.credit_sales.clear();
    record.split_sales.clear();
    record.opening_cash.clear();
    record.opening_bank_balance.clear();
    hydrate(record, ctx);
}

/// Build a fresh hydrated session record.
pub fn start_record(ctx: &AggregateContext) -> ReconciliationRecord {
    let mut record = ReconciliationRecord::empty();
    hydrate(&mut record, ctx);
    record
}

/// Record a physical count for one face value. Negative counts are clamped
/// to 0, never rejected. An unscheduled face is appended rather than lost.
pub fn set_denomination_count(record: &mut ReconciliationRecord, face_value: f64, count: i64) {
    let count = count.max(0);
    match record
        .denomination_counts
        .iter_mut()
        .find(|line| money_eq(line.face_value, face_value))
    {
        Some(line) => line.count = count,
        None => record
            .denomination_counts
            .push(DenominationCount { face_value, count }),
    }
}
