//! Day Operation Model (营业日管理)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ReconciliationRecord;

/// Day operation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStatus {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "CLOSED")]
    Closed,
}

impl Default for DayStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// Day operation record - a store's trading-day lifecycle
///
/// At most one OPEN day operation exists per store, system-wide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOperation {
    pub id: String,
    pub store_id: String,
    /// Trading date this operation covers
    pub business_date: NaiveDate,
    pub status: DayStatus,
    /// Cash in the drawer when the day was opened
    pub opening_cash: f64,
    /// Bank balance when the day was opened
    pub opening_bank_balance: f64,
    /// Close time (Unix millis), null while still open
    pub closed_at: Option<i64>,
    /// Closing snapshot, written once on close
    pub closing: Option<ClosingSnapshot>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create day operation payload (open day)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOperationCreate {
    pub store_id: String,
    pub business_date: NaiveDate,
    /// Starting drawer cash (default 0)
    #[serde(default)]
    pub opening_cash: f64,
    /// Starting bank balance (default 0)
    #[serde(default)]
    pub opening_bank_balance: f64,
}

/// Closing snapshot persisted when a day is closed
///
/// Effective totals are the values the close was reconciled against
/// (manual override if one was set, aggregate otherwise).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosingSnapshot {
    pub total_sales: f64,
    pub cash_sales: f64,
    pub card_sales: f64,
    pub credit_sales: f64,
    pub split_sales: f64,
    pub opening_cash: f64,
    pub opening_bank_balance: f64,
    pub expected_cash: f64,
    pub actual_cash_count: f64,
    pub cash_variance: f64,
    pub expected_bank: f64,
    pub actual_bank_balance: f64,
    pub bank_variance: f64,
    pub card_swipe_variance: f64,
    /// The raw editing-session record the snapshot was derived from
    pub record: ReconciliationRecord,
    pub note: Option<String>,
}

/// Authoritative day status flags, re-read before every lifecycle transition
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DayStatusFlags {
    pub is_open: bool,
    pub can_close: bool,
    pub can_reopen: bool,
}
