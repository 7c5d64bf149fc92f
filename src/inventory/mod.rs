//! Keeps product stock consistent with recorded sales.
//!
//! A sale is one conceptual transaction: the stock decrement and the income
//! record either both happen or neither does. Every check, including the
//! positive-amount check the ledger applies on append, runs before the first
//! mutation, so a rejected call leaves the books exactly as they were.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::books::Books;
use crate::errors::{BooksError, Result};
use crate::ledger::{RecordKind, SaleDetails, TransactionRecord};

/// Ledger category used for income records produced by sales.
pub const SALE_CATEGORY: &str = "Penjualan Produk";

/// Outcome of a successful sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleReceipt {
    pub record_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub units: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub remaining_stock: u32,
}

/// Stock mutations and the sale transaction. The only code path allowed to
/// change product stock.
pub struct InventoryService;

impl InventoryService {
    /// Adds a new product to the catalog.
    pub fn add_product(
        books: &mut Books,
        name: impl Into<String>,
        unit_price: f64,
        stock: u32,
    ) -> Result<Uuid> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BooksError::Validation("product name cannot be empty".into()));
        }
        if unit_price < 0.0 {
            return Err(BooksError::Validation(format!(
                "unit price cannot be negative, got {unit_price}"
            )));
        }
        let id = books.catalog.add(crate::catalog::Product::new(name, unit_price, stock));
        books.touch();
        Ok(id)
    }

    /// Sells `units` of a product: decrements stock and appends one income
    /// record carrying the sale details.
    ///
    /// Stock is validated before the total price is computed. A supplied
    /// customer id must refer to a registered customer.
    pub fn record_sale(
        books: &mut Books,
        product_id: Uuid,
        units: u32,
        date: NaiveDate,
        customer_id: Option<Uuid>,
        note: Option<&str>,
    ) -> Result<SaleReceipt> {
        if units == 0 {
            return Err(BooksError::Validation("units sold must be greater than zero".into()));
        }
        if let Some(id) = customer_id {
            if books.customer(id).is_none() {
                return Err(BooksError::NotFound(format!("customer {id}")));
            }
        }
        let product = books
            .catalog
            .product(product_id)
            .ok_or_else(|| BooksError::NotFound(format!("product {product_id}")))?;
        let available = product.stock();
        if units > available {
            tracing::warn!(%product_id, units, available, "sale rejected, insufficient stock");
            return Err(BooksError::InsufficientStock {
                requested: units,
                available,
            });
        }

        let product_name = product.name.clone();
        let unit_price = product.unit_price;
        let total_price = units as f64 * unit_price;
        if total_price <= 0.0 {
            return Err(BooksError::Validation(format!(
                "sale of `{product_name}` totals {total_price}, nothing to record"
            )));
        }

        // All checks passed; neither mutation below can fail.
        let mut record =
            TransactionRecord::new(date, SALE_CATEGORY, RecordKind::Income, total_price)
                .with_sale(SaleDetails {
                    product_id,
                    product_name: product_name.clone(),
                    units,
                    customer_id,
                });
        if let Some(note) = note {
            record = record.with_note(note);
        }
        let record_id = books.ledger.append(record)?;

        let product = books
            .catalog
            .product_mut(product_id)
            .ok_or_else(|| BooksError::NotFound(format!("product {product_id}")))?;
        product.deduct(units);
        let remaining_stock = product.stock();
        books.touch();

        tracing::info!(%product_id, units, total_price, remaining_stock, "sale recorded");
        Ok(SaleReceipt {
            record_id,
            product_id,
            product_name,
            units,
            unit_price,
            total_price,
            remaining_stock,
        })
    }

    /// Increments stock, e.g. after a delivery. Returns the new stock level.
    pub fn restock(books: &mut Books, product_id: Uuid, units: u32) -> Result<u32> {
        if units == 0 {
            return Err(BooksError::Validation("restock units must be greater than zero".into()));
        }
        let product = books
            .catalog
            .product_mut(product_id)
            .ok_or_else(|| BooksError::NotFound(format!("product {product_id}")))?;
        product.receive(units);
        let stock = product.stock();
        books.touch();
        tracing::info!(%product_id, units, stock, "restocked");
        Ok(stock)
    }

    /// Manual stock decrement not tied to a sale, e.g. damaged goods.
    pub fn reduce_stock(books: &mut Books, product_id: Uuid, units: u32) -> Result<u32> {
        if units == 0 {
            return Err(BooksError::Validation("units must be greater than zero".into()));
        }
        let product = books
            .catalog
            .product_mut(product_id)
            .ok_or_else(|| BooksError::NotFound(format!("product {product_id}")))?;
        if !product.deduct(units) {
            let available = product.stock();
            return Err(BooksError::InsufficientStock {
                requested: units,
                available,
            });
        }
        let stock = product.stock();
        books.touch();
        tracing::info!(%product_id, units, stock, "stock reduced");
        Ok(stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::Customer;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn books_with_product(price: f64, stock: u32) -> (Books, Uuid) {
        let mut books = Books::new("Toko");
        let id = InventoryService::add_product(&mut books, "Produk A", price, stock).unwrap();
        (books, id)
    }

    #[test]
    fn sale_decrements_stock_and_appends_income() {
        let (mut books, p1) = books_with_product(50_000.0, 10);
        let receipt =
            InventoryService::record_sale(&mut books, p1, 3, date(2025, 2, 1), None, None)
                .expect("sale succeeds");

        assert_eq!(receipt.total_price, 150_000.0);
        assert_eq!(receipt.remaining_stock, 7);
        assert_eq!(books.catalog.product(p1).unwrap().stock(), 7);

        let record = books.ledger.record(receipt.record_id).expect("record exists");
        assert!(record.is_income());
        assert_eq!(record.amount, 150_000.0);
        assert_eq!(record.sale.as_ref().map(|s| s.units), Some(3));
    }

    #[test]
    fn oversell_fails_and_leaves_books_unchanged() {
        let (mut books, p1) = books_with_product(50_000.0, 10);
        InventoryService::record_sale(&mut books, p1, 3, date(2025, 2, 1), None, None).unwrap();

        let err = InventoryService::record_sale(&mut books, p1, 8, date(2025, 2, 1), None, None)
            .expect_err("oversell must fail");
        assert!(matches!(
            err,
            BooksError::InsufficientStock {
                requested: 8,
                available: 7
            }
        ));
        assert_eq!(books.catalog.product(p1).unwrap().stock(), 7);
        assert_eq!(books.ledger.record_count(), 1);
    }

    #[test]
    fn stock_after_sequence_reflects_successful_sales_only() {
        let (mut books, p1) = books_with_product(10_000.0, 20);
        let day = date(2025, 2, 2);
        let attempts = [5u32, 30, 5, 11, 10];
        let mut sold = 0u32;
        for units in attempts {
            if InventoryService::record_sale(&mut books, p1, units, day, None, None).is_ok() {
                sold += units;
            }
        }
        assert_eq!(books.catalog.product(p1).unwrap().stock(), 20 - sold);
        assert_eq!(books.ledger.record_count(), 3);
    }

    #[test]
    fn sale_of_unknown_product_fails() {
        let mut books = Books::new("Toko");
        let err = InventoryService::record_sale(
            &mut books,
            Uuid::new_v4(),
            1,
            date(2025, 2, 1),
            None,
            None,
        )
        .expect_err("unknown product");
        assert!(matches!(err, BooksError::NotFound(_)));
    }

    #[test]
    fn sale_with_unknown_customer_fails_before_any_mutation() {
        let (mut books, p1) = books_with_product(50_000.0, 10);
        let err = InventoryService::record_sale(
            &mut books,
            p1,
            2,
            date(2025, 2, 1),
            Some(Uuid::new_v4()),
            None,
        )
        .expect_err("unknown customer");
        assert!(matches!(err, BooksError::NotFound(_)));
        assert_eq!(books.catalog.product(p1).unwrap().stock(), 10);
        assert_eq!(books.ledger.record_count(), 0);
    }

    #[test]
    fn sale_with_registered_customer_is_tagged() {
        let (mut books, p1) = books_with_product(50_000.0, 10);
        let customer = books.add_customer(Customer::new("Sari"));
        let receipt = InventoryService::record_sale(
            &mut books,
            p1,
            1,
            date(2025, 2, 1),
            Some(customer),
            Some("walk-in"),
        )
        .unwrap();
        let record = books.ledger.record(receipt.record_id).unwrap();
        assert_eq!(record.sale.as_ref().and_then(|s| s.customer_id), Some(customer));
        assert_eq!(record.note.as_deref(), Some("walk-in"));
    }

    #[test]
    fn restock_increments_and_rejects_zero() {
        let (mut books, p1) = books_with_product(50_000.0, 7);
        assert_eq!(InventoryService::restock(&mut books, p1, 5).unwrap(), 12);

        let err = InventoryService::restock(&mut books, p1, 0).expect_err("zero restock");
        assert!(matches!(err, BooksError::Validation(_)));
        assert_eq!(books.catalog.product(p1).unwrap().stock(), 12);
    }

    #[test]
    fn reduce_stock_honours_available_units() {
        let (mut books, p1) = books_with_product(50_000.0, 4);
        assert_eq!(InventoryService::reduce_stock(&mut books, p1, 3).unwrap(), 1);
        let err = InventoryService::reduce_stock(&mut books, p1, 2).expect_err("overdraw");
        assert!(matches!(err, BooksError::InsufficientStock { .. }));
        assert_eq!(books.catalog.product(p1).unwrap().stock(), 1);
    }

    #[test]
    fn zero_priced_product_sale_is_rejected_whole() {
        let (mut books, p1) = books_with_product(0.0, 10);
        let err = InventoryService::record_sale(&mut books, p1, 2, date(2025, 2, 1), None, None)
            .expect_err("zero total");
        assert!(matches!(err, BooksError::Validation(_)));
        assert_eq!(books.catalog.product(p1).unwrap().stock(), 10);
        assert_eq!(books.ledger.record_count(), 0);
    }

    #[test]
    fn add_product_validates_name_and_price() {
        let mut books = Books::new("Toko");
        assert!(InventoryService::add_product(&mut books, " ", 1.0, 1).is_err());
        assert!(InventoryService::add_product(&mut books, "Produk", -1.0, 1).is_err());
        assert!(books.catalog.is_empty());
    }
}
