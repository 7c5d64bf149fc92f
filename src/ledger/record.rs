use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ledger entry. Immutable once appended; the ledger exposes no
/// update or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    pub kind: RecordKind,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Present on income records produced by a product sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale: Option<SaleDetails>,
}

impl TransactionRecord {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        kind: RecordKind,
        amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            category: category.into(),
            kind,
            amount,
            note: None,
            sale: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_sale(mut self, sale: SaleDetails) -> Self {
        self.sale = Some(sale);
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordKind {
    Income,
    Expense,
}

/// Sale metadata carried on income records so per-product and per-customer
/// reports can be derived from the ledger alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleDetails {
    pub product_id: Uuid,
    pub product_name: String,
    pub units: u32,
    #[serde(default)]
    pub customer_id: Option<Uuid>,
}
