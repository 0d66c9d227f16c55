//! Day lifecycle state machine (开店 / 关店 / 重开)
//!
//! Open → Closed → (admin) → Open. Every transition re-reads the
//! authoritative day state immediately before acting and fails outright on a
//! contradiction: no retry, no action on a stale snapshot. Close and reopen
//! are non-idempotent: repeating one on a day already in the target state is
//! an error, so a financial snapshot can never be written twice.

use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;

use shared::models::{
    ClosingSnapshot, DayOperation, DayOperationCreate, DayStatus, Operator, ReconciliationRecord,
};
use shared::{EngineError, EngineResult};

use crate::reconcile;
use crate::record::AggregateContext;
use crate::sources::{DayOperationStore, SyncNotifier};
use crate::utils::time;
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_cash_amount, validate_optional_text,
    validate_required_text,
};

const RESOURCE: &str = "day_operation";

/// Owns the open/closed state machine and its preconditions.
pub struct DayLifecycleManager {
    days: Arc<dyn DayOperationStore>,
    notifier: Arc<dyn SyncNotifier>,
    timezone: Tz,
}

impl DayLifecycleManager {
    pub fn new(
        days: Arc<dyn DayOperationStore>,
        notifier: Arc<dyn SyncNotifier>,
        timezone: Tz,
    ) -> Self {
        Self {
            days,
            notifier,
            timezone,
        }
    }

    /// Open a trading day for a store.
    ///
    /// Conflict if the store already has an open day, any date.
    pub async fn open_day(&self, data: DayOperationCreate) -> EngineResult<DayOperation> {
        validate_required_text(&data.store_id, "store_id", MAX_SHORT_TEXT_LEN)?;
        validate_cash_amount(data.opening_cash, "opening_cash")?;
        validate_cash_amount(data.opening_bank_balance, "opening_bank_balance")?;
        time::validate_not_future(data.business_date, self.timezone)?;

        if let Some(open) = self.days.find_open_for_store(&data.store_id).await? {
            return Err(EngineError::conflict(format!(
                "Store {} already has {} open",
                data.store_id, open.business_date
            )));
        }

        let day = self.days.create(data).await?;

        tracing::info!(
            store_id = %day.store_id,
            date = %day.business_date,
            opening_cash = day.opening_cash,
            "Day opened"
        );

        self.notifier.broadcast(RESOURCE, "created", &day.id).await;

        Ok(day)
    }

    /// Close a trading day, persisting the reconciliation snapshot.
    ///
    /// Status and the canClose precondition are re-read fresh; a day that is
    /// not currently open, or not yet closeable, fails with InvalidState.
    pub async fn close_day(
        &self,
        id: &str,
        record: &ReconciliationRecord,
        ctx: &AggregateContext,
    ) -> EngineResult<DayOperation> {
        validate_optional_text(&record.note, "note", MAX_NOTE_LEN)?;

        let day = self
            .days
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found(format!("Day operation {id} not found")))?;

        if day.status != DayStatus::Open {
            return Err(EngineError::invalid_state(format!(
                "Day operation {id} is not open"
            )));
        }

        let flags = self.days.day_status(&day.store_id, day.business_date).await?;
        if !flags.can_close {
            return Err(EngineError::invalid_state(format!(
                "Day {} for store {} cannot be closed yet",
                day.business_date, day.store_id
            )));
        }

        let snapshot = build_closing_snapshot(record, ctx);
        let closed = self
            .days
            .close(id, snapshot, shared::util::now_millis())
            .await?;

        tracing::info!(
            store_id = %closed.store_id,
            date = %closed.business_date,
            cash_variance = closed.closing.as_ref().map(|s| s.cash_variance),
            bank_variance = closed.closing.as_ref().map(|s| s.bank_variance),
            "Day closed"
        );

        self.notifier.broadcast(RESOURCE, "closed", id).await;

        Ok(closed)
    }

    /// Reopen a closed day. Admin only.
    ///
    /// Conflict if a *different* date is currently open for the same store,
    /// checked fresh, never from a cached flag.
    pub async fn reopen_day(&self, id: &str, operator: &Operator) -> EngineResult<DayOperation> {
        if !operator.is_admin() {
            return Err(EngineError::invalid_state(format!(
                "Operator {} may not reopen a day",
                operator.display_name
            )));
        }

        let day = self
            .days
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found(format!("Day operation {id} not found")))?;

        if day.status != DayStatus::Closed {
            return Err(EngineError::invalid_state(format!(
                "Day operation {id} is not closed"
            )));
        }

        if let Some(open) = self.days.find_open_for_store(&day.store_id).await?
            && open.business_date != day.business_date
        {
            return Err(EngineError::conflict(format!(
                "Store {} has {} open, close it before reopening {}",
                day.store_id, open.business_date, day.business_date
            )));
        }

        let reopened = self.days.reopen(id).await?;

        tracing::info!(
            store_id = %reopened.store_id,
            date = %reopened.business_date,
            operator = %operator.id,
            "Day reopened"
        );

        self.notifier.broadcast(RESOURCE, "reopened", id).await;

        Ok(reopened)
    }

    /// Advisory follow-up after a close: the next calendar date, proposed
    /// only when it has already arrived in the business timezone.
    pub fn propose_next_open_date(&self, closed: &DayOperation) -> Option<NaiveDate> {
        let today = chrono::Utc::now()
            .with_timezone(&self.timezone)
            .date_naive();
        let next = closed.business_date.succ_opt()?;
        (next <= today).then_some(next)
    }
}

/// Freeze the session into the snapshot persisted on close.
pub fn build_closing_snapshot(
    record: &ReconciliationRecord,
    ctx: &AggregateContext,
) -> ClosingSnapshot {
    let summary = reconcile::summarize(record, ctx);
    let eff = summary.effective_sales;

    ClosingSnapshot {
        total_sales: eff.total_sales,
        cash_sales: eff.cash_sales,
        card_sales: eff.card_sales,
        credit_sales: eff.credit_sales,
        split_sales: eff.split_sales,
        opening_cash: eff.opening_cash,
        opening_bank_balance: eff.opening_bank_balance,
        expected_cash: summary.expected_cash,
        actual_cash_count: summary.actual_cash_count,
        cash_variance: summary.cash_variance,
        expected_bank: summary.expected_bank,
        actual_bank_balance: summary.actual_bank_balance,
        bank_variance: summary.bank_variance,
        card_swipe_variance: summary.card_swipe_variance,
        note: record.note.clone(),
        record: record.clone(),
    }
}
