//! Advisory per-section completeness/error flags
//!
//! Pure derivation for the editing UI. These flags never gate the close
//! transition; lifecycle preconditions are checked separately.

use shared::models::{SectionStatus, Severity, TabFlags};

/// Cash variance (absolute) that marks the cash section as erroneous
const CASH_ERROR_LIMIT: f64 = 100.0;
/// Bank variance (absolute) that marks the bank section as erroneous
const BANK_ERROR_LIMIT: f64 = 200.0;

/// Derived figures the sections are judged on
#[derive(Debug, Clone, Copy)]
pub struct TabInputs {
    pub actual_cash_count: f64,
    pub cash_variance: f64,
    pub actual_bank_balance: f64,
    /// Effective opening bank balance (a zero-balance store needs no entry)
    pub opening_bank_balance: f64,
    pub bank_variance: f64,
    pub severity: Severity,
}

/// Evaluate all section flags.
pub fn evaluate(inputs: &TabInputs) -> TabFlags {
    TabFlags {
        cash: SectionStatus {
            is_complete: inputs.actual_cash_count > 0.0,
            has_errors: inputs.cash_variance.abs() > CASH_ERROR_LIMIT,
        },
        bank: SectionStatus {
            is_complete: inputs.actual_bank_balance > 0.0 || inputs.opening_bank_balance == 0.0,
            has_errors: inputs.bank_variance.abs() > BANK_ERROR_LIMIT,
        },
        // Optional sub-feature: always fine
        monitoring: SectionStatus {
            is_complete: true,
            has_errors: false,
        },
        review: SectionStatus {
            is_complete: inputs.severity != Severity::Critical,
            has_errors: inputs.severity == Severity::Critical,
        },
    }
}
