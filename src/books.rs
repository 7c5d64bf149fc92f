//! The explicitly owned application state: catalog, ledger, expenses, and
//! customers together form one session's books.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    catalog::Catalog, customers::Customer, expenses::ExpenseEntry, ledger::Ledger,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// All state mutated across a bookkeeping session. Callers own an instance
/// and pass it to the services; there is no global singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Books {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub ledger: Ledger,
    #[serde(default)]
    pub fixed_expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub variable_expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Books::schema_version_default")]
    pub schema_version: u8,
}

impl Books {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            catalog: Catalog::new(),
            ledger: Ledger::new(),
            fixed_expenses: Vec::new(),
            variable_expenses: Vec::new(),
            customers: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Creates books around an already-built catalog, e.g. a seed catalog
    /// loaded from configuration.
    pub fn with_catalog(name: impl Into<String>, catalog: Catalog) -> Self {
        let mut books = Self::new(name);
        books.catalog = catalog;
        books
    }

    pub fn add_customer(&mut self, customer: Customer) -> Uuid {
        let id = customer.id;
        self.customers.push(customer);
        self.touch();
        id
    }

    pub fn customer(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
