//! Utang ledger: records, storage, aggregation, and export

pub mod display;
pub mod export;
pub mod service;
pub mod storage;
pub mod summary;
pub mod types;

pub use service::LedgerService;
pub use storage::{LedgerError, LedgerStorage};
pub use types::{DueStatus, Loan, LoanQuery, SortOrder, StatusFilter};
