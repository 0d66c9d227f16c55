//! Engine facade
//!
//! Composition root over the data-source traits: fans the aggregator reads
//! out concurrently, runs editing sessions, and fronts the lifecycle
//! transitions for callers that hold only a day-operation id.

use std::sync::Arc;

use chrono::NaiveDate;

use shared::models::{DayOperation, ReconciliationRecord, ReconciliationSummary};
use shared::{EngineError, EngineResult};

use crate::aggregate::{aggregate_credit, aggregate_sales, aggregate_supplier};
use crate::config::EngineConfig;
use crate::lifecycle::DayLifecycleManager;
use crate::record::{self, AggregateContext};
use crate::reconcile;
use crate::sources::{
    CreditLedgerSource, DayOperationStore, SupplierPaymentSource, SyncNotifier, TransactionSource,
};
use crate::utils::time;

pub struct ReconciliationEngine {
    config: EngineConfig,
    transactions: Arc<dyn TransactionSource>,
    credit: Arc<dyn CreditLedgerSource>,
    suppliers: Arc<dyn SupplierPaymentSource>,
    days: Arc<dyn DayOperationStore>,
    lifecycle: DayLifecycleManager,
}

impl ReconciliationEngine {
    pub fn new(
        config: EngineConfig,
        transactions: Arc<dyn TransactionSource>,
        credit: Arc<dyn CreditLedgerSource>,
        suppliers: Arc<dyn SupplierPaymentSource>,
        days: Arc<dyn DayOperationStore>,
        notifier: Arc<dyn SyncNotifier>,
    ) -> Self {
        let lifecycle = DayLifecycleManager::new(days.clone(), notifier, config.timezone);
        Self {
            config,
            transactions,
            credit,
            suppliers,
            days,
            lifecycle,
        }
    }

    /// Open/close/reopen transitions.
    pub fn lifecycle(&self) -> &DayLifecycleManager {
        &self.lifecycle
    }

    /// Pull all aggregates for a store and date. The reads are independent
    /// and side-effect-free, so they run concurrently.
    pub async fn aggregate_context(
        &self,
        store_id: &str,
        date: NaiveDate,
    ) -> EngineResult<AggregateContext> {
        let window = time::day_window_millis(date, self.config.timezone);

        let (transactions, credit, suppliers, day) = futures::try_join!(
            self.transactions.list_transactions(store_id, date),
            self.credit.list_credit_transactions(Some(store_id)),
            self.suppliers.list_supplier_payments(date),
            self.days.find_by_store_date(store_id, date),
        )?;

        let (opening_cash, opening_bank_balance) = day
            .map(|d| (d.opening_cash, d.opening_bank_balance))
            .unwrap_or((0.0, 0.0));

        tracing::debug!(
            store_id,
            date = %date,
            transactions = transactions.len(),
            credit_movements = credit.len(),
            supplier_payments = suppliers.len(),
            "Aggregates fetched"
        );

        Ok(AggregateContext {
            sales: aggregate_sales(&transactions),
            credit: aggregate_credit(&credit, window),
            supplier: aggregate_supplier(&suppliers),
            opening_cash,
            opening_bank_balance,
        })
    }

    /// Begin an editing session: a hydrated record plus the aggregates it
    /// resolves against.
    pub async fn start_session(
        &self,
        store_id: &str,
        date: NaiveDate,
    ) -> EngineResult<(ReconciliationRecord, AggregateContext)> {
        let ctx = self.aggregate_context(store_id, date).await?;
        Ok((record::start_record(&ctx), ctx))
    }

    /// Re-pull aggregates and force them back onto the record, discarding
    /// manual overrides. Idempotent for unchanged upstream data.
    pub async fn refresh_session(
        &self,
        record: &mut ReconciliationRecord,
        store_id: &str,
        date: NaiveDate,
    ) -> EngineResult<AggregateContext> {
        let ctx = self.aggregate_context(store_id, date).await?;
        record::refresh(record, &ctx);
        Ok(ctx)
    }

    /// Full reconciliation result for the presentation layer.
    pub async fn summarize(
        &self,
        store_id: &str,
        date: NaiveDate,
        record: &ReconciliationRecord,
    ) -> EngineResult<ReconciliationSummary> {
        let ctx = self.aggregate_context(store_id, date).await?;
        Ok(reconcile::summarize(record, &ctx))
    }

    /// Close the day behind an id, re-aggregating fresh before the snapshot
    /// is built.
    pub async fn close_day(
        &self,
        id: &str,
        record: &ReconciliationRecord,
    ) -> EngineResult<DayOperation> {
        let day = self
            .days
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found(format!("Day operation {id} not found")))?;

        let ctx = self
            .aggregate_context(&day.store_id, day.business_date)
            .await?;

        self.lifecycle.close_day(id, record, &ctx).await
    }
}
