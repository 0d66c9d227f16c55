//! In-memory data sources for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;

use recon_engine::sources::{
    CreditLedgerSource, DayOperationStore, SupplierPaymentSource, SyncNotifier, TransactionSource,
};
use shared::EngineResult;
use shared::models::{
    ClosingSnapshot, CreditTransaction, DayOperation, DayOperationCreate, DayStatus,
    DayStatusFlags, Operator, Role, SupplierPayment, Transaction,
};

#[derive(Default)]
pub struct MemoryTransactions {
    pub items: Mutex<Vec<Transaction>>,
}

#[async_trait]
impl TransactionSource for MemoryTransactions {
    async fn list_transactions(
        &self,
        store_id: &str,
        _date: NaiveDate,
    ) -> EngineResult<Vec<Transaction>> {
        // Fixtures hold a single date's data; scope by store only
        Ok(self
            .items
            .lock()
            .iter()
            .filter(|t| t.store_id == store_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryCreditLedger {
    pub items: Mutex<Vec<CreditTransaction>>,
}

#[async_trait]
impl CreditLedgerSource for MemoryCreditLedger {
    async fn list_credit_transactions(
        &self,
        _store_id: Option<&str>,
    ) -> EngineResult<Vec<CreditTransaction>> {
        // The engine filters by date; return the full ledger
        Ok(self.items.lock().clone())
    }
}

#[derive(Default)]
pub struct MemorySupplierPayments {
    pub items: Mutex<Vec<SupplierPayment>>,
}

#[async_trait]
impl SupplierPaymentSource for MemorySupplierPayments {
    async fn list_supplier_payments(
        &self,
        _date: NaiveDate,
    ) -> EngineResult<Vec<SupplierPayment>> {
        Ok(self.items.lock().clone())
    }
}

/// Day-operation store with a switchable canClose precondition
pub struct MemoryDayStore {
    pub days: Mutex<Vec<DayOperation>>,
    pub allow_close: Mutex<bool>,
}

impl Default for MemoryDayStore {
    fn default() -> Self {
        Self {
            days: Mutex::new(Vec::new()),
            allow_close: Mutex::new(true),
        }
    }
}

#[async_trait]
impl DayOperationStore for MemoryDayStore {
    async fn find_by_id(&self, id: &str) -> EngineResult<Option<DayOperation>> {
        Ok(self.days.lock().iter().find(|d| d.id == id).cloned())
    }

    async fn find_by_store_date(
        &self,
        store_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<DayOperation>> {
        Ok(self
            .days
            .lock()
            .iter()
            .find(|d| d.store_id == store_id && d.business_date == date)
            .cloned())
    }

    async fn find_open_for_store(&self, store_id: &str) -> EngineResult<Option<DayOperation>> {
        Ok(self
            .days
            .lock()
            .iter()
            .find(|d| d.store_id == store_id && d.status == DayStatus::Open)
            .cloned())
    }

    async fn day_status(&self, store_id: &str, date: NaiveDate) -> EngineResult<DayStatusFlags> {
        let days = self.days.lock();
        let this_day = days
            .iter()
            .find(|d| d.store_id == store_id && d.business_date == date);
        let other_open = days
            .iter()
            .any(|d| d.store_id == store_id && d.status == DayStatus::Open && d.business_date != date);

        let is_open = matches!(this_day.map(|d| d.status), Some(DayStatus::Open));
        Ok(DayStatusFlags {
            is_open,
            can_close: is_open && *self.allow_close.lock(),
            can_reopen: matches!(this_day.map(|d| d.status), Some(DayStatus::Closed))
                && !other_open,
        })
    }

    async fn create(&self, data: DayOperationCreate) -> EngineResult<DayOperation> {
        let now = shared::util::now_millis();
        let day = DayOperation {
            id: shared::util::new_id(),
            store_id: data.store_id,
            business_date: data.business_date,
            status: DayStatus::Open,
            opening_cash: data.opening_cash,
            opening_bank_balance: data.opening_bank_balance,
            closed_at: None,
            closing: None,
            created_at: now,
            updated_at: now,
        };
        self.days.lock().push(day.clone());
        Ok(day)
    }

    async fn close(
        &self,
        id: &str,
        snapshot: ClosingSnapshot,
        closed_at: i64,
    ) -> EngineResult<DayOperation> {
        let mut days = self.days.lock();
        let day = days
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| shared::EngineError::not_found(format!("Day {id} not found")))?;
        day.status = DayStatus::Closed;
        day.closed_at = Some(closed_at);
        day.closing = Some(snapshot);
        day.updated_at = closed_at;
        Ok(day.clone())
    }

    async fn reopen(&self, id: &str) -> EngineResult<DayOperation> {
        let mut days = self.days.lock();
        let day = days
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| shared::EngineError::not_found(format!("Day {id} not found")))?;
        day.status = DayStatus::Open;
        day.closed_at = None;
        day.updated_at = shared::util::now_millis();
        Ok(day.clone())
    }
}

/// Notifier that records every broadcast for assertions
#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Mutex<Vec<(String, String, String)>>,
}

impl RecordingNotifier {
    pub fn has_event(&self, resource: &str, action: &str, id: &str) -> bool {
        self.events
            .lock()
            .iter()
            .any(|(r, a, i)| r == resource && a == action && i == id)
    }
}

#[async_trait]
impl SyncNotifier for RecordingNotifier {
    async fn broadcast(&self, resource: &str, action: &str, id: &str) {
        self.events.lock().push((
            resource.to_string(),
            action.to_string(),
            id.to_string(),
        ));
    }
}

pub fn admin() -> Operator {
    Operator {
        id: "emp-1".to_string(),
        display_name: "Alba".to_string(),
        role: Role::Admin,
    }
}

pub fn staff() -> Operator {
    Operator {
        id: "emp-2".to_string(),
        display_name: "Marc".to_string(),
        role: Role::Staff,
    }
}
