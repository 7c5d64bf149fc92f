//! Stateless aggregation over a [`Books`] snapshot.
//!
//! Nothing here caches: every report walks the relevant records on each call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::books::Books;
use crate::errors::{BooksError, Result};
use crate::expenses;
use crate::ledger::{RecordKind, ReportPeriod, TransactionRecord};

/// Per-product sale totals, in first-seen product order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductTotals {
    pub product_id: Uuid,
    pub product_name: String,
    pub units: u32,
    pub revenue: f64,
}

/// Three-way income/expense split for the financial overview and its
/// proportional (pie) display.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
}

impl FinancialSummary {
    pub fn total_expenses(&self) -> f64 {
        self.fixed_expenses + self.variable_expenses
    }

    pub fn net(&self) -> f64 {
        self.total_income - self.total_expenses()
    }

    /// Labelled shares of income, fixed, and variable expenses relative to
    /// their combined sum. Empty when everything is zero.
    pub fn breakdown(&self) -> Vec<(&'static str, f64)> {
        let sum = self.total_income + self.total_expenses();
        if sum == 0.0 {
            return Vec::new();
        }
        vec![
            ("Income", self.total_income / sum),
            ("Fixed expenses", self.fixed_expenses / sum),
            ("Variable expenses", self.variable_expenses / sum),
        ]
    }
}

/// Income and expense totals on one date, for time-series display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

pub struct ReportService;

impl ReportService {
    /// Groups income sale records by product, summing units and revenue.
    /// Products appear in the order they were first sold.
    pub fn totals_by_product(books: &Books) -> Vec<ProductTotals> {
        let mut totals: Vec<ProductTotals> = Vec::new();
        for record in &books.ledger.records {
            let Some(sale) = record.sale.as_ref() else {
                continue;
            };
            if !record.is_income() {
                continue;
            }
            match totals.iter().position(|t| t.product_id == sale.product_id) {
                Some(idx) => {
                    totals[idx].units += sale.units;
                    totals[idx].revenue += record.amount;
                }
                None => totals.push(ProductTotals {
                    product_id: sale.product_id,
                    product_name: sale.product_name.clone(),
                    units: sale.units,
                    revenue: record.amount,
                }),
            }
        }
        totals
    }

    /// The `n` best-selling products by unit count. The sort is stable, so
    /// ties keep first-seen order.
    pub fn top_products(books: &Books, n: usize) -> Vec<ProductTotals> {
        let mut totals = Self::totals_by_product(books);
        totals.sort_by(|a, b| b.units.cmp(&a.units));
        totals.truncate(n);
        totals
    }

    /// Income from the ledger against fixed and variable expense totals.
    pub fn financial_summary(books: &Books) -> FinancialSummary {
        FinancialSummary {
            total_income: books.ledger.summarize().total_income,
            fixed_expenses: expenses::total(&books.fixed_expenses),
            variable_expenses: expenses::total(&books.variable_expenses),
        }
    }

    /// Per-date income/expense totals over the records matching `period`,
    /// sorted by date, with `today` as the Daily reference.
    pub fn daily_series(books: &Books, period: &ReportPeriod, today: NaiveDate) -> Vec<DailyTotals> {
        let mut series: Vec<DailyTotals> = Vec::new();
        for record in books.ledger.filter_by_period_on(period, today) {
            let idx = series
                .iter()
                .position(|e| e.date == record.date)
                .unwrap_or_else(|| {
                    series.push(DailyTotals {
                        date: record.date,
                        income: 0.0,
                        expense: 0.0,
                    });
                    series.len() - 1
                });
            match record.kind {
                RecordKind::Income => series[idx].income += record.amount,
                RecordKind::Expense => series[idx].expense += record.amount,
            }
        }
        series.sort_by_key(|entry| entry.date);
        series
    }

    /// Sale records for one registered customer, in ledger order.
    pub fn purchase_history(books: &Books, customer_id: Uuid) -> Result<Vec<&TransactionRecord>> {
        if books.customer(customer_id).is_none() {
            return Err(BooksError::NotFound(format!("customer {customer_id}")));
        }
        Ok(books
            .ledger
            .records
            .iter()
            .filter(|record| {
                record
                    .sale
                    .as_ref()
                    .is_some_and(|sale| sale.customer_id == Some(customer_id))
            })
            .collect())
    }
}
