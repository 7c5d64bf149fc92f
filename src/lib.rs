#![doc(test(attr(deny(warnings))))]

//! Shopbooks offers the ledger, catalog, and reporting primitives behind a
//! small-business bookkeeping workflow: recording income and expense
//! transactions, keeping product stock consistent with sales, and deriving
//! summaries for display.

pub mod books;
pub mod catalog;
pub mod customers;
pub mod demo;
pub mod errors;
pub mod expenses;
pub mod inventory;
pub mod ledger;
pub mod reports;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Shopbooks tracing initialized.");
    });
}
