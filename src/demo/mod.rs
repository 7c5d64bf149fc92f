//! Deterministic demo and test data, isolated from production constructors.
//!
//! Nothing in this module is reachable from [`Books::new`] or the services;
//! callers that want a populated dashboard opt in explicitly.

use chrono::{Duration, NaiveDate};

use crate::books::Books;
use crate::catalog::{Catalog, Product};
use crate::expenses::{ExpenseEntry, ExpenseService};
use crate::inventory::InventoryService;

const PRODUCT_TYPES: &[(&str, &[&str])] = &[
    ("T-Shirts", &["Short Sleeve", "Long Sleeve", "AIRism Cotton", "Cotton"]),
    (
        "Jackets",
        &[
            "Reversible Parka",
            "Pocketable UV Protection Parka",
            "BLOCKTECH Parka 3D Cut",
            "Zip Up Blouson",
        ],
    ),
    (
        "Flannel",
        &["Flannel Shirt Long Sleeve", "Flannel Long Sleeve Checked", "Flannel Long Sleeve"],
    ),
    (
        "Sweater",
        &[
            "Crew Neck Long Sleeve Sweater",
            "Polo Sweater Short Sleeve",
            "3D Knit Crew Neck Sweater",
            "Waffle V Neck Sweater",
        ],
    ),
    (
        "Jeans",
        &["Wide Tapered Jeans", "Straight Jeans", "Slim Fit Jeans", "Ultra Stretch Skinny Fit Jeans"],
    ),
    (
        "Shorts",
        &["Stretch Slim Fit Shorts", "Geared Shorts", "Ultra Stretch Shorts", "Cargo Shorts"],
    ),
    (
        "Chinos",
        &["Slim Fit Chino Pants", "Pleated Wide Chino Pants", "Wide Fit Chino Pants", "Chino Shorts"],
    ),
    ("Sweat Pants", &["Sweat Pants", "Sweat Wide Pants", "Ultra Stretch Sweat Shorts"]),
];

const SIZES: &[&str] = &["Small", "Medium", "Large"];
const COLORS: &[&str] = &["Hijau", "Hitam", "Putih"];
const DEMO_STOCK: u32 = 100;

/// Clothing catalog grid (type x name x size x color), stock 100 each, with
/// deterministic prices in the 100 000 to 300 000 range so repeated runs
/// render the same dashboard.
pub fn demo_catalog() -> Catalog {
    let mut products = Vec::new();
    let mut index = 0usize;
    for (kind, names) in PRODUCT_TYPES {
        for name in *names {
            for size in SIZES {
                for color in COLORS {
                    let display = format!("{kind} {name} {size} {color}");
                    products.push(Product::new(display, demo_price(index), DEMO_STOCK));
                    index += 1;
                }
            }
        }
    }
    Catalog::from_products(products)
}

/// The five recurring costs of the demo shop.
pub fn demo_fixed_expenses() -> Vec<ExpenseEntry> {
    vec![
        ExpenseEntry::new("Gaji Karyawan", 5_000_000.0),
        ExpenseEntry::new("Bahan Baku", 7_000_000.0),
        ExpenseEntry::new("Utilitas", 2_000_000.0),
        ExpenseEntry::new("Advertising", 3_000_000.0),
        ExpenseEntry::new("Asuransi", 1_500_000.0),
    ]
}

/// Books with a deterministic simulated sales history covering the `days`
/// leading up to `until`, inclusive.
pub fn demo_books(until: NaiveDate, days: u32) -> Books {
    let mut books = Books::with_catalog("Demo Shop", demo_catalog());
    ExpenseService::set_fixed(&mut books, demo_fixed_expenses())
        .expect("demo fixed expenses are valid");

    let product_ids: Vec<_> = books.catalog.products.iter().map(|p| p.id).collect();
    let mut pick = 0usize;
    for day_offset in (0..days).rev() {
        let day = until - Duration::days(day_offset as i64);
        // A handful of sales per day, cycling through the catalog.
        for sale in 0..3 {
            let product_id = product_ids[pick % product_ids.len()];
            let units = 1 + ((pick + sale) % 3) as u32;
            InventoryService::record_sale(&mut books, product_id, units, day, None, None)
                .expect("demo stock is ample");
            pick += 7;
        }
        if day_offset % 3 == 0 {
            ExpenseService::add_variable(&mut books, "Operasional", 150_000.0, day)
                .expect("demo expense is valid");
        }
    }
    books
}

fn demo_price(index: usize) -> f64 {
    // Spread over 100_000..=300_000 in 10_000 steps.
    100_000.0 + ((index * 37) % 21) as f64 * 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportService;

    #[test]
    fn demo_catalog_covers_the_grid_with_bounded_prices() {
        let catalog = demo_catalog();
        let grid: usize = PRODUCT_TYPES
            .iter()
            .map(|(_, names)| names.len() * SIZES.len() * COLORS.len())
            .sum();
        assert_eq!(catalog.len(), grid);
        for product in &catalog.products {
            assert!(product.unit_price >= 100_000.0 && product.unit_price <= 300_000.0);
            assert_eq!(product.stock(), DEMO_STOCK);
        }
    }

    #[test]
    fn demo_books_keep_the_stock_invariant() {
        let until = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let books = demo_books(until, 14);
        assert!(books.ledger.record_count() > 0);

        // Units deducted per product must match the units recorded as sold.
        for totals in ReportService::totals_by_product(&books) {
            let product = books.catalog.product(totals.product_id).unwrap();
            assert_eq!(product.stock(), DEMO_STOCK - totals.units);
        }
    }

    #[test]
    fn demo_books_are_reproducible() {
        let until = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let a = demo_books(until, 7);
        let b = demo_books(until, 7);
        assert_eq!(
            a.ledger.summarize().total_income,
            b.ledger.summarize().total_income
        );
    }
}
