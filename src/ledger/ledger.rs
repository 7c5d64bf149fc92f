use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BooksError, Result};

use super::{period::ReportPeriod, record::TransactionRecord};

/// Append-only history of transaction records in insertion order.
///
/// Insertion order is preserved for chronological display; aggregates never
/// depend on it. Totals are recomputed from the records on every call, so no
/// cached value can diverge from the history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub records: Vec<TransactionRecord>,
}

/// Totals derived from the full record history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, rejecting non-positive amounts.
    pub fn append(&mut self, record: TransactionRecord) -> Result<Uuid> {
        if record.amount <= 0.0 {
            return Err(BooksError::Validation(format!(
                "amount must be greater than zero, got {}",
                record.amount
            )));
        }
        let id = record.id;
        self.records.push(record);
        Ok(id)
    }

    pub fn record(&self, id: Uuid) -> Option<&TransactionRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Recomputes income, expense, and balance over the full history.
    pub fn summarize(&self) -> LedgerSummary {
        let mut summary = LedgerSummary::default();
        for record in &self.records {
            match record.kind {
                super::RecordKind::Income => summary.total_income += record.amount,
                super::RecordKind::Expense => summary.total_expense += record.amount,
            }
        }
        summary.balance = summary.total_income - summary.total_expense;
        summary
    }

    /// Records falling in `period`, with today taken from the system clock.
    pub fn filter_by_period(&self, period: &ReportPeriod) -> Vec<&TransactionRecord> {
        self.filter_by_period_on(period, Utc::now().date_naive())
    }

    /// Records falling in `period` with an explicit reference date for
    /// [`ReportPeriod::Daily`].
    pub fn filter_by_period_on(
        &self,
        period: &ReportPeriod,
        today: NaiveDate,
    ) -> Vec<&TransactionRecord> {
        self.records
            .iter()
            .filter(|record| period.contains(record.date, today))
            .collect()
    }
}
