//! Append-only transaction history and period filtering.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod record;

pub use ledger::{Ledger, LedgerSummary};
pub use period::ReportPeriod;
pub use record::{RecordKind, SaleDetails, TransactionRecord};
