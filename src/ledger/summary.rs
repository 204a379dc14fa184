//! Aggregation and filtering over the in-memory loan list
//!
//! Everything here is a pure function of its inputs; no storage access.
//! The CLI loads the ledger once and applies these transforms on top.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::types::{DueStatus, Loan, LoanQuery, SortOrder, StatusFilter};

/// Days ahead (inclusive) that still count as "upcoming"
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Amount totals across the whole ledger
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub total: Decimal,
    pub unpaid: Decimal,
    pub paid: Decimal,
}

/// One platform's share of the unpaid total
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformShare {
    pub platform: String,
    pub amount: Decimal,
    /// Percentage of the unpaid total (0 when the unpaid total is 0)
    pub percentage: Decimal,
}

/// Sum amounts over all, unpaid, and paid records
pub fn totals(loans: &[Loan]) -> Totals {
    let mut unpaid = Decimal::ZERO;
    let mut paid = Decimal::ZERO;

    for loan in loans {
        if loan.is_paid {
            paid += loan.amount;
        } else {
            unpaid += loan.amount;
        }
    }

    Totals {
        total: unpaid + paid,
        unpaid,
        paid,
    }
}

/// Group unpaid loans by platform, with each group's share of the unpaid
/// total
///
/// Output is ordered by summed amount descending; groups with equal sums
/// keep their first-encounter order.
pub fn platform_breakdown(loans: &[Loan]) -> Vec<PlatformShare> {
    let mut shares: Vec<PlatformShare> = Vec::new();

    for loan in loans.iter().filter(|loan| !loan.is_paid) {
        match shares.iter_mut().find(|s| s.platform == loan.platform) {
            Some(share) => share.amount += loan.amount,
            None => shares.push(PlatformShare {
                platform: loan.platform.clone(),
                amount: loan.amount,
                percentage: Decimal::ZERO,
            }),
        }
    }

    let total: Decimal = shares.iter().map(|s| s.amount).sum();
    if total > Decimal::ZERO {
        for share in &mut shares {
            share.percentage = share.amount / total * Decimal::ONE_HUNDRED;
        }
    }

    // Stable sort keeps encounter order for equal amounts
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    shares
}

/// Classify a due date against "today" (both taken at local midnight)
pub fn due_status(due_date: NaiveDate, today: NaiveDate) -> DueStatus {
    let diff_days = (due_date - today).num_days();

    if diff_days < 0 {
        DueStatus::Overdue
    } else if diff_days <= UPCOMING_WINDOW_DAYS {
        DueStatus::Upcoming
    } else {
        DueStatus::Normal
    }
}

/// Unpaid loans due within the upcoming window, soonest first
pub fn upcoming_payments<'a>(loans: &'a [Loan], today: NaiveDate) -> Vec<&'a Loan> {
    let mut upcoming: Vec<&Loan> = loans
        .iter()
        .filter(|loan| !loan.is_paid && due_status(loan.due_date, today) == DueStatus::Upcoming)
        .collect();

    upcoming.sort_by_key(|loan| loan.due_date);
    upcoming
}

/// Apply search, status filter, and sort to the loaded list
pub fn apply_query<'a>(loans: &'a [Loan], query: &LoanQuery) -> Vec<&'a Loan> {
    let mut results: Vec<&Loan> = loans
        .iter()
        .filter(|loan| {
            if let Some(search) = &query.search {
                if !loan.matches_search(search) {
                    return false;
                }
            }

            match query.status {
                StatusFilter::All => true,
                StatusFilter::Unpaid => !loan.is_paid,
                StatusFilter::Paid => loan.is_paid,
            }
        })
        .collect();

    match query.sort {
        Some(SortOrder::AmountDesc) => results.sort_by(|a, b| b.amount.cmp(&a.amount)),
        Some(SortOrder::DueDateAsc) => results.sort_by_key(|loan| loan.due_date),
        None => {}
    }

    results
}
