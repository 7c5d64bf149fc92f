use chrono::NaiveDate;

use shopbooks::{
    books::Books,
    errors::BooksError,
    expenses::{ExpenseEntry, ExpenseService},
    init,
    inventory::InventoryService,
    ledger::ReportPeriod,
    reports::ReportService,
};

#[test]
fn bookkeeping_session_smoke() {
    init();

    let mut books = Books::new("SmokeTest");
    let p1 = InventoryService::add_product(&mut books, "Produk A", 50_000.0, 10).unwrap();
    let p2 = InventoryService::add_product(&mut books, "Produk B", 35_000.0, 5).unwrap();

    let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let receipt = InventoryService::record_sale(&mut books, p1, 3, day, None, None).unwrap();
    assert_eq!(receipt.total_price, 150_000.0);
    assert_eq!(books.catalog.product(p1).unwrap().stock(), 7);

    // A sale beyond the remaining stock is rejected without touching anything.
    let err = InventoryService::record_sale(&mut books, p1, 8, day, None, None).unwrap_err();
    assert!(matches!(err, BooksError::InsufficientStock { .. }));
    assert_eq!(books.catalog.product(p1).unwrap().stock(), 7);
    assert_eq!(books.ledger.record_count(), 1);

    InventoryService::record_sale(&mut books, p2, 2, day, None, None).unwrap();
    ExpenseService::set_fixed(&mut books, vec![ExpenseEntry::new("Sewa", 100_000.0)]).unwrap();
    ExpenseService::add_variable(&mut books, "Listrik", 20_000.0, day).unwrap();

    let ledger = books.ledger.summarize();
    assert_eq!(ledger.total_income, 220_000.0);
    assert_eq!(ledger.balance, ledger.total_income - ledger.total_expense);

    let summary = ReportService::financial_summary(&books);
    assert_eq!(summary.total_income, 220_000.0);
    assert_eq!(summary.total_expenses(), 120_000.0);

    let window = ReportPeriod::DateRange {
        start: day,
        end: day,
    };
    assert_eq!(books.ledger.filter_by_period_on(&window, day).len(), 2);

    let top = ReportService::top_products(&books, 1);
    assert_eq!(top[0].product_id, p1);
}
