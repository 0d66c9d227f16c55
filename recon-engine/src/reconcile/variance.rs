//! Variance classification and advisory insight generation
//!
//! The advisory rules form an ordered table; every entry is evaluated
//! independently against the same context, so several can fire at once.
//! Insights and recommendations are text only and never block a transition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::Severity;

use crate::money::{to_decimal, to_f64};

/// Cash variance (absolute) above which a recount is suggested
const CASH_VARIANCE_ALERT: f64 = 50.0;
/// Bank variance (absolute) above which pending settlements are suspected
const BANK_VARIANCE_ALERT: f64 = 100.0;
/// Average transaction value below which recording problems are suspected
const LOW_AVG_TRANSACTION: f64 = 10.0;
/// Total variance under which a low-severity day is called out as clean
const CLEAN_DAY_LIMIT: f64 = 10.0;

/// Raw figures the analyzer classifies
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VarianceInput {
    pub cash_variance: f64,
    pub bank_variance: f64,
    /// Effective total sales for the date
    pub total_sales: f64,
    pub total_transactions: u32,
    pub avg_transaction_value: f64,
}

/// Classification result plus advisory texts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarianceReport {
    pub total_variance: f64,
    pub variance_percentage: f64,
    pub severity: Severity,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Everything a rule predicate may look at
struct VarianceContext {
    input: VarianceInput,
    total_variance: f64,
    severity: Severity,
}

struct AdvisoryRule {
    applies: fn(&VarianceContext) -> bool,
    insight: &'static str,
    recommendations: &'static [&'static str],
}

fn cash_variance_large(c: &VarianceContext) -> bool {
    c.input.cash_variance.abs() > CASH_VARIANCE_ALERT
}

fn bank_variance_large(c: &VarianceContext) -> bool {
    c.input.bank_variance.abs() > BANK_VARIANCE_ALERT
}

fn no_transactions(c: &VarianceContext) -> bool {
    c.input.total_transactions == 0
}

fn low_average_value(c: &VarianceContext) -> bool {
    c.input.avg_transaction_value > 0.0 && c.input.avg_transaction_value < LOW_AVG_TRANSACTION
}

fn clean_reconciliation(c: &VarianceContext) -> bool {
    c.severity == Severity::Low && c.total_variance < CLEAN_DAY_LIMIT
}

const ADVISORY_RULES: &[AdvisoryRule] = &[
    AdvisoryRule {
        applies: cash_variance_large,
        insight: "Cash variance is unusually large for this date",
        recommendations: &[
            "Recount the cash drawer, including the misc tray",
            "Re-check each denomination line against the count sheet",
        ],
    },
    AdvisoryRule {
        applies: bank_variance_large,
        insight: "Bank variance is unusually large for this date",
        recommendations: &[
            "Check for card settlements still pending with the bank",
            "Compare the card terminal batch against the bank statement",
        ],
    },
    AdvisoryRule {
        applies: no_transactions,
        insight: "No transactions were recorded for this date",
        recommendations: &["Verify the POS has synced all transactions for the date"],
    },
    AdvisoryRule {
        applies: low_average_value,
        insight: "Average transaction value is unusually low",
        recommendations: &["Check for split or partially recorded transactions"],
    },
    AdvisoryRule {
        applies: clean_reconciliation,
        insight: "Good reconciliation: variances are within tolerance",
        recommendations: &[],
    },
];

/// Classify severity from the variance percentage.
fn severity_for(percentage: f64) -> Severity {
    if percentage > 10.0 {
        Severity::Critical
    } else if percentage > 5.0 {
        Severity::High
    } else if percentage > 2.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Compute total variance, percentage-of-sales, severity, and advisories.
pub fn analyze(input: VarianceInput) -> VarianceReport {
    let total_variance = to_f64(
        to_decimal(input.cash_variance).abs() + to_decimal(input.bank_variance).abs(),
    );

    let variance_percentage = if input.total_sales > 0.0 {
        to_f64(
            to_decimal(total_variance) / to_decimal(input.total_sales) * Decimal::ONE_HUNDRED,
        )
    } else {
        0.0
    };

    let severity = severity_for(variance_percentage);

    let ctx = VarianceContext {
        input,
        total_variance,
        severity,
    };

    let mut insights = Vec::new();
    let mut recommendations = Vec::new();
    for rule in ADVISORY_RULES {
        if (rule.applies)(&ctx) {
            insights.push(rule.insight.to_string());
            recommendations.extend(rule.recommendations.iter().map(|r| r.to_string()));
        }
    }

    VarianceReport {
        total_variance,
        variance_percentage,
        severity,
        insights,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with_percentage(pct: f64) -> VarianceInput {
        // total_sales 1000 makes the percentage equal the cash variance / 10
        VarianceInput {
            cash_variance: pct * 10.0,
            bank_variance: 0.0,
            total_sales: 1_000.0,
            total_transactions: 40,
            avg_transaction_value: 25.0,
        }
    }

    #[test]
    fn severity_boundaries_both_sides() {
        assert_eq!(analyze(input_with_percentage(2.0)).severity, Severity::Low);
        assert_eq!(analyze(input_with_percentage(2.01)).severity, Severity::Medium);
        assert_eq!(analyze(input_with_percentage(5.0)).severity, Severity::Medium);
        assert_eq!(analyze(input_with_percentage(5.01)).severity, Severity::High);
        assert_eq!(analyze(input_with_percentage(10.0)).severity, Severity::High);
        assert_eq!(analyze(input_with_percentage(10.01)).severity, Severity::Critical);
    }

    #[test]
    fn zero_sales_means_zero_percentage() {
        let report = analyze(VarianceInput {
            cash_variance: 75.0,
            bank_variance: 0.0,
            total_sales: 0.0,
            total_transactions: 0,
            avg_transaction_value: 0.0,
        });
        assert_eq!(report.variance_percentage, 0.0);
        assert_eq!(report.severity, Severity::Low);
    }

    #[test]
    fn total_variance_sums_absolutes() {
        let report = analyze(VarianceInput {
            cash_variance: -30.0,
            bank_variance: 20.0,
            total_sales: 1_000.0,
            total_transactions: 10,
            avg_transaction_value: 100.0,
        });
        assert_eq!(report.total_variance, 50.0);
        assert_eq!(report.variance_percentage, 5.0);
    }

    #[test]
    fn rules_can_cooccur() {
        // Large cash AND bank variance, plus an empty transaction log
        let report = analyze(VarianceInput {
            cash_variance: 60.0,
            bank_variance: -150.0,
            total_sales: 10_000.0,
            total_transactions: 0,
            avg_transaction_value: 0.0,
        });

        assert_eq!(report.insights.len(), 3);
        assert_eq!(report.recommendations.len(), 5);
    }

    #[test]
    fn clean_day_gets_positive_insight() {
        let report = analyze(VarianceInput {
            cash_variance: 3.0,
            bank_variance: -2.0,
            total_sales: 1_000.0,
            total_transactions: 40,
            avg_transaction_value: 25.0,
        });

        assert_eq!(report.severity, Severity::Low);
        assert_eq!(report.total_variance, 5.0);
        assert_eq!(
            report.insights,
            vec!["Good reconciliation: variances are within tolerance".to_string()]
        );
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn low_value_rule_ignores_zero_average() {
        let quiet = analyze(VarianceInput {
            cash_variance: 0.0,
            bank_variance: 0.0,
            total_sales: 0.0,
            total_transactions: 0,
            avg_transaction_value: 0.0,
        });
        assert!(!quiet
            .insights
            .iter()
            .any(|i| i.contains("Average transaction value")));

        let low = analyze(VarianceInput {
            cash_variance: 0.0,
            bank_variance: 0.0,
            total_sales: 90.0,
            total_transactions: 10,
            avg_transaction_value: 9.0,
        });
        assert!(low
            .insights
            .iter()
            .any(|i| i.contains("Average transaction value")));
    }

    #[test]
    fn boundary_variances_do_not_trigger_alerts() {
        let report = analyze(VarianceInput {
            cash_variance: 50.0,
            bank_variance: 100.0,
            total_sales: 100_000.0,
            total_transactions: 500,
            avg_transaction_value: 200.0,
        });
        assert!(report.insights.iter().all(|i| !i.contains("unusually large")));
    }
}
