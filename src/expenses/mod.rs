//! Fixed and variable expense entries outside the sales ledger.
//!
//! Fixed expenses are a configuration set replaced wholesale; variable
//! expenses accumulate during operation like ledger records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::books::Books;
use crate::errors::{BooksError, Result};

/// A single cost entry. Fixed entries usually carry no date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseEntry {
    pub label: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ExpenseEntry {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Sums a slice of expense entries.
pub fn total(entries: &[ExpenseEntry]) -> f64 {
    entries.iter().map(|entry| entry.amount).sum()
}

/// Validated mutations of the expense sets on [`Books`].
pub struct ExpenseService;

impl ExpenseService {
    /// Appends a variable expense entry.
    pub fn add_variable(
        books: &mut Books,
        label: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Result<()> {
        let label = label.into();
        validate_entry(&label, amount)?;
        books.variable_expenses.push(ExpenseEntry {
            label,
            amount,
            date: Some(date),
        });
        books.touch();
        Ok(())
    }

    /// Replaces the fixed-expense configuration set.
    pub fn set_fixed(books: &mut Books, entries: Vec<ExpenseEntry>) -> Result<()> {
        for entry in &entries {
            validate_entry(&entry.label, entry.amount)?;
        }
        books.fixed_expenses = entries;
        books.touch();
        Ok(())
    }
}

fn validate_entry(label: &str, amount: f64) -> Result<()> {
    if label.trim().is_empty() {
        return Err(BooksError::Validation("expense label cannot be empty".into()));
    }
    if amount <= 0.0 {
        return Err(BooksError::Validation(format!(
            "expense amount must be greater than zero, got {amount}"
        )));
    }
    Ok(())
}
