//! Reconciliation Record and Summary Models
//!
//! The record is transient: one per end-of-day editing session. Override
//! fields are explicit `Auto | Manual(value)` rather than an absent-value
//! sentinel, so `Manual(0.0)` stays distinguishable from "not overridden".

use serde::{Deserialize, Serialize};

/// Fixed ordered denomination schedule (EUR faces, largest first)
pub const DENOMINATION_SCHEDULE: &[f64] = &[
    500.0, 200.0, 100.0, 50.0, 20.0, 10.0, 5.0, 2.0, 1.0, 0.5, 0.2, 0.1, 0.05, 0.02, 0.01,
];

/// An auto-populated field that a user may override
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum Override {
    /// Resolve to the aggregate value at calculation time
    #[default]
    Auto,
    /// User-entered value; survives auto-population until an explicit refresh
    Manual(f64),
}

impl Override {
    /// The effective value: the manual entry if set, else the aggregate.
    pub fn effective(&self, auto: f64) -> f64 {
        match self {
            Self::Auto => auto,
            Self::Manual(v) => *v,
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, Self::Manual(_))
    }

    pub fn set(&mut self, value: f64) {
        *self = Self::Manual(value);
    }

    pub fn clear(&mut self) {
        *self = Self::Auto;
    }
}

/// One line of the physical cash count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DenominationCount {
    pub face_value: f64,
    /// Number of notes/coins counted; entry paths clamp negatives to 0
    pub count: i64,
}

/// End-of-day editing session state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReconciliationRecord {
    /// Physical count, ordered per [`DENOMINATION_SCHEDULE`]
    #[serde(default)]
    pub denomination_counts: Vec<DenominationCount>,
    /// Loose/unbagged cash not covered by the schedule
    #[serde(default)]
    pub cash_misc_amount: f64,
    #[serde(default)]
    pub card_misc_amount: f64,

    // Owner movements
    #[serde(default)]
    pub owner_cash_deposits: f64,
    #[serde(default)]
    pub owner_cash_withdrawals: f64,
    #[serde(default)]
    pub owner_bank_deposits: f64,
    #[serde(default)]
    pub owner_bank_withdrawals: f64,

    // Credit ledger amounts (auto-filled from the ledger, editable after)
    #[serde(default)]
    pub credit_payments_cash: f64,
    #[serde(default)]
    pub credit_payments_card: f64,
    #[serde(default)]
    pub credit_refunds_given: f64,

    // Outflows
    #[serde(default)]
    pub expense_payments: f64,
    #[serde(default)]
    pub supplier_payments: f64,
    /// Signed: positive = cash moved to bank, negative = bank moved to cash
    #[serde(default)]
    pub bank_transfers: f64,

    // Bank side
    #[serde(default)]
    pub actual_bank_balance: f64,
    /// Card terminal's reported batch total
    #[serde(default)]
    pub pos_card_swipe_amount: f64,
    #[serde(default)]
    pub bank_withdrawals: f64,

    // Override fields
    #[serde(default)]
    pub total_sales: Override,
    #[serde(default)]
    pub cash_sales: Override,
    #[serde(default)]
    pub card_sales: Override,
    #[serde(default)]
    pub credit_sales: Override,
    #[serde(default)]
    pub split_sales: Override,
    #[serde(default)]
    pub opening_cash: Override,
    #[serde(default)]
    pub opening_bank_balance: Override,

    pub note: Option<String>,
}

impl ReconciliationRecord {
    /// A blank session record with a zeroed count for every scheduled face.
    pub fn empty() -> Self {
        Self {
            denomination_counts: DENOMINATION_SCHEDULE
                .iter()
                .map(|&face_value| DenominationCount {
                    face_value,
                    count: 0,
                })
                .collect(),
            ..Self::default()
        }
    }
}

/// Variance severity relative to total sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Per-section advisory completeness/error flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionStatus {
    pub is_complete: bool,
    pub has_errors: bool,
}

/// Advisory UI state per reconciliation tab; never gates a transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabFlags {
    pub cash: SectionStatus,
    pub bank: SectionStatus,
    pub monitoring: SectionStatus,
    pub review: SectionStatus,
}

/// Effective sales totals resolved against overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectiveTotals {
    pub total_sales: f64,
    pub cash_sales: f64,
    pub card_sales: f64,
    pub credit_sales: f64,
    pub split_sales: f64,
    pub opening_cash: f64,
    pub opening_bank_balance: f64,
}

/// Full reconciliation result handed back to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    pub effective_sales: EffectiveTotals,
    pub expected_cash: f64,
    pub actual_cash_count: f64,
    pub cash_variance: f64,
    pub expected_bank: f64,
    pub actual_bank_balance: f64,
    pub bank_variance: f64,
    pub card_swipe_variance: f64,
    pub total_variance: f64,
    pub variance_percentage: f64,
    pub severity: Severity,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub tab_flags: TabFlags,
}
