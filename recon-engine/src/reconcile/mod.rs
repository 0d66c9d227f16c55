//! Reconciliation calculations and summary assembly
//!
//! Everything here is pure: missing inputs degrade to zero, nothing fails.

pub mod bank;
pub mod cash;
pub mod tabs;
pub mod variance;

use shared::models::{ReconciliationRecord, ReconciliationSummary};

use crate::record::{AggregateContext, effective_totals};

/// Run the full calculation pipeline over a session record.
pub fn summarize(record: &ReconciliationRecord, ctx: &AggregateContext) -> ReconciliationSummary {
    let eff = effective_totals(record, ctx);

    let actual_cash_count = cash::actual_cash_count(record);
    let expected_cash = cash::expected_cash(record, ctx);
    let cash_variance = cash::cash_variance(record, ctx);

    let expected_bank = bank::expected_bank(record, ctx);
    let bank_variance = bank::bank_variance(record, ctx);
    let card_swipe_variance = bank::card_swipe_variance(record, ctx);

    let report = variance::analyze(variance::VarianceInput {
        cash_variance,
        bank_variance,
        total_sales: eff.total_sales,
        total_transactions: ctx.sales.total_count,
        avg_transaction_value: ctx.sales.average_transaction_value(),
    });

    let tab_flags = tabs::evaluate(&tabs::TabInputs {
        actual_cash_count,
        cash_variance,
        actual_bank_balance: record.actual_bank_balance,
        opening_bank_balance: eff.opening_bank_balance,
        bank_variance,
        severity: report.severity,
    });

    ReconciliationSummary {
        effective_sales: eff,
        expected_cash,
        actual_cash_count,
        cash_variance,
        expected_bank,
        actual_bank_balance: record.actual_bank_balance,
        bank_variance,
        card_swipe_variance,
        total_variance: report.total_variance,
        variance_percentage: report.variance_percentage,
        severity: report.severity,
        insights: report.insights,
        recommendations: report.recommendations,
        tab_flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{MethodTally, SalesBreakdown};
    use crate::record::set_denomination_count;
    use shared::models::Severity;

    #[test]
    fn summary_ties_the_pipeline_together() {
        let ctx = AggregateContext {
            sales: SalesBreakdown {
                cash: MethodTally { amount: 250.0, count: 10 },
                card: MethodTally { amount: 500.0, count: 10 },
                total_amount: 750.0,
                total_count: 20,
                ..Default::default()
            },
            opening_cash: 100.0,
            opening_bank_balance: 1_000.0,
            ..Default::default()
        };

        let mut record = crate::record::start_record(&ctx);
        set_denomination_count(&mut record, 100.0, 3);
        set_denomination_count(&mut record, 50.0, 1);
        record.actual_bank_balance = 1_500.0;
        record.pos_card_swipe_amount = 500.0;

        let summary = summarize(&record, &ctx);

        assert_eq!(summary.effective_sales.total_sales, 750.0);
        assert_eq!(summary.expected_cash, 350.0);
        assert_eq!(summary.actual_cash_count, 350.0);
        assert_eq!(summary.cash_variance, 0.0);
        assert_eq!(summary.expected_bank, 1_500.0);
        assert_eq!(summary.bank_variance, 0.0);
        assert_eq!(summary.card_swipe_variance, 0.0);
        assert_eq!(summary.severity, Severity::Low);
        assert!(summary.tab_flags.review.is_complete);
    }

    #[test]
    fn critical_day_is_flagged_but_only_advisory() {
        // 150 cash variance on 1000 sales → 15% → critical
        let ctx = AggregateContext {
            sales: SalesBreakdown {
                cash: MethodTally { amount: 1_000.0, count: 20 },
                total_amount: 1_000.0,
                total_count: 20,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut record = crate::record::start_record(&ctx);
        set_denomination_count(&mut record, 500.0, 2);
        set_denomination_count(&mut record, 100.0, 1);
        set_denomination_count(&mut record, 50.0, 1);

        let summary = summarize(&record, &ctx);

        assert_eq!(summary.cash_variance, 150.0);
        assert_eq!(summary.variance_percentage, 15.0);
        assert_eq!(summary.severity, Severity::Critical);
        assert!(summary.tab_flags.review.has_errors);
        // The cash section errors too: |150| > 100
        assert!(summary.tab_flags.cash.has_errors);
    }
}
