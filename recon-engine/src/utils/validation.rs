//! Input validation helpers
//!
//! Centralized text length constants and validation functions. These run at
//! the lifecycle boundary only; calculation functions never validate, they
//! degrade to zero.

use shared::{EngineError, EngineResult};

use crate::money::require_finite;

// ── Text length limits ──────────────────────────────────────────────

/// Short identifiers: store ids, operator ids
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Notes and free-text remarks on a reconciliation
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(EngineError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(EngineError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> EngineResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(EngineError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a cash amount is finite and non-negative
pub fn validate_cash_amount(value: f64, field: &str) -> EngineResult<()> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(EngineError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}
