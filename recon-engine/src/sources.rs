//! External data-source seams
//!
//! The engine consumes POS transactions, the credit ledger, supplier
//! payments, and the day-operation store through these traits; test suites
//! and hosting services provide the implementations. Reads are
//! side-effect-free and may run concurrently; their results are only summed.

use async_trait::async_trait;
use chrono::NaiveDate;

use shared::EngineResult;
use shared::models::{
    ClosingSnapshot, CreditTransaction, DayOperation, DayOperationCreate, DayStatusFlags,
    SupplierPayment, Transaction,
};

/// Completed store transactions, queried per store and trading date.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn list_transactions(
        &self,
        store_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<Transaction>>;
}

/// Customer credit-account movements. The source returns the full ledger
/// (optionally scoped to a store); the engine filters to the target date.
#[async_trait]
pub trait CreditLedgerSource: Send + Sync {
    async fn list_credit_transactions(
        &self,
        store_id: Option<&str>,
    ) -> EngineResult<Vec<CreditTransaction>>;
}

/// Supplier payments made on a given date.
#[async_trait]
pub trait SupplierPaymentSource: Send + Sync {
    async fn list_supplier_payments(&self, date: NaiveDate) -> EngineResult<Vec<SupplierPayment>>;
}

/// The authoritative day-operation store.
///
/// Lifecycle transitions re-read status through this trait immediately
/// before acting; implementations must answer from current state, never
/// from a cache.
#[async_trait]
pub trait DayOperationStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> EngineResult<Option<DayOperation>>;

    async fn find_by_store_date(
        &self,
        store_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<DayOperation>>;

    /// The store's single open day operation, any date.
    async fn find_open_for_store(&self, store_id: &str) -> EngineResult<Option<DayOperation>>;

    async fn day_status(&self, store_id: &str, date: NaiveDate) -> EngineResult<DayStatusFlags>;

    async fn create(&self, data: DayOperationCreate) -> EngineResult<DayOperation>;

    /// Persist the closing snapshot and flip status to CLOSED.
    async fn close(
        &self,
        id: &str,
        snapshot: ClosingSnapshot,
        closed_at: i64,
    ) -> EngineResult<DayOperation>;

    /// Flip status back to OPEN, clearing the close marker.
    async fn reopen(&self, id: &str) -> EngineResult<DayOperation>;
}

/// Completion signal for external cache/read-model invalidation.
///
/// The engine only emits; invalidation itself is owned by the caller.
#[async_trait]
pub trait SyncNotifier: Send + Sync {
    async fn broadcast(&self, resource: &str, action: &str, id: &str);
}
