//! Type definitions for the utang ledger

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single loan/debt record
///
/// Wire field names match the persisted JSON layout (`dueDate`, `dateAdded`,
/// `isPaid`), so existing ledgers stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Unique record id, assigned at creation and immutable afterwards
    pub id: i64,

    /// Counterparty the loan is owed to (bank, app, or person)
    pub platform: String,

    /// Loan amount, persisted as a plain JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Due date (calendar date, no time-of-day)
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,

    /// Free-form notes, empty when unset
    #[serde(default)]
    pub notes: String,

    /// Creation timestamp, never mutated
    #[serde(rename = "dateAdded")]
    pub date_added: DateTime<Utc>,

    /// Whether the loan has been settled
    #[serde(rename = "isPaid", default)]
    pub is_paid: bool,
}

impl Loan {
    /// Check if the record matches a search term (case-insensitive
    /// substring match on platform or notes)
    pub fn matches_search(&self, search: &str) -> bool {
        let search_lower = search.to_lowercase();

        if self.platform.to_lowercase().contains(&search_lower) {
            return true;
        }

        if !self.notes.is_empty() && self.notes.to_lowercase().contains(&search_lower) {
            return true;
        }

        false
    }
}

/// Derived due-date classification relative to "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Due date already passed
    Overdue,
    /// Due within the next 7 days (inclusive, including today)
    Upcoming,
    /// Everything else
    Normal,
}

impl std::fmt::Display for DueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueStatus::Overdue => write!(f, "overdue"),
            DueStatus::Upcoming => write!(f, "upcoming"),
            DueStatus::Normal => write!(f, "normal"),
        }
    }
}

/// Paid-state filter for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Unpaid,
    Paid,
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "unpaid" => Ok(StatusFilter::Unpaid),
            "paid" => Ok(StatusFilter::Paid),
            other => Err(format!(
                "'{}' is not a valid status (expected all, unpaid, or paid)",
                other
            )),
        }
    }
}

/// Sort order for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Amount, high to low
    AmountDesc,
    /// Due date, soonest first
    DueDateAsc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amount" => Ok(SortOrder::AmountDesc),
            "due-date" | "date" => Ok(SortOrder::DueDateAsc),
            other => Err(format!(
                "'{}' is not a valid sort order (expected amount or due-date)",
                other
            )),
        }
    }
}

/// Query parameters for filtering the in-memory loan list
///
/// All filters compose over a single loaded list; nothing re-reads storage.
#[derive(Debug, Clone, Default)]
pub struct LoanQuery {
    /// Search term (platform or notes)
    pub search: Option<String>,

    /// Paid-state filter
    pub status: StatusFilter,

    /// Sort order; `None` keeps the original order
    pub sort: Option<SortOrder>,
}
